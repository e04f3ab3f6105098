//! Addresses assigned to the local network interfaces.

use serde::Deserialize;
use serde_json::Value;
use std::net::IpAddr;

use super::{append_items, parse_options, Entry, Options, Toggle};
use crate::core::context::Context;
use crate::error::Result;
use crate::ui::lines::LineSink;

const DEFAULT_MAX_COUNT: usize = 4;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanIpOptions {
    pub ipv6_support: bool,
    pub max_count: Toggle<usize>,
    pub one_line: bool,
}

impl Default for LanIpOptions {
    fn default() -> Self {
        Self {
            ipv6_support: true,
            max_count: Toggle::Value(DEFAULT_MAX_COUNT),
            one_line: false,
        }
    }
}

pub struct LanIp {
    name: String,
    options: LanIpOptions,
    value: Vec<String>,
}

impl LanIp {
    pub fn new(name: String, options: &Options, _ctx: &Context) -> Self {
        let options: LanIpOptions = parse_options(&name, options);

        let networks = sysinfo::Networks::new_with_refreshed_list();
        let interfaces: Vec<(String, Vec<IpAddr>)> = networks
            .list()
            .iter()
            .map(|(interface, data)| {
                let addrs = data.ip_networks().iter().map(|network| network.addr).collect();
                (interface.clone(), addrs)
            })
            .collect();

        let mut value = select_addresses(interfaces, options.ipv6_support);
        if let Some(max_count) = options.max_count.clone().resolve(DEFAULT_MAX_COUNT) {
            value.truncate(max_count);
        }

        Self {
            name,
            options,
            value,
        }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

/// Non-loopback addresses, interfaces sorted by name, IPv4 before IPv6
pub fn select_addresses(mut interfaces: Vec<(String, Vec<IpAddr>)>, ipv6_support: bool) -> Vec<String> {
    interfaces.sort_by(|a, b| a.0.cmp(&b.0));

    let mut addresses = Vec::new();
    for (_, addrs) in &interfaces {
        let usable = addrs.iter().filter(|addr| !addr.is_loopback());

        addresses.extend(usable.clone().filter(|addr| addr.is_ipv4()).map(IpAddr::to_string));
        if ipv6_support {
            addresses.extend(usable.filter(|addr| addr.is_ipv6()).map(IpAddr::to_string));
        }
    }

    addresses
}

impl Entry for LanIp {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        Value::from(self.value.clone())
    }

    fn render(&self, sink: &mut LineSink) {
        if self.value.is_empty() {
            let no_address = sink.default_strings().no_address.clone();
            sink.append(&self.name, no_address);
            return;
        }

        append_items(sink, &self.name, &self.value, self.options.one_line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DefaultStrings;
    use crate::ui::colors::Palette;

    fn interfaces() -> Vec<(String, Vec<IpAddr>)> {
        vec![
            (
                "wlan0".to_string(),
                vec!["fe80::1".parse().unwrap(), "192.168.1.20".parse().unwrap()],
            ),
            (
                "lo".to_string(),
                vec!["127.0.0.1".parse().unwrap(), "::1".parse().unwrap()],
            ),
            ("eth0".to_string(), vec!["10.0.0.5".parse().unwrap()]),
        ]
    }

    #[test]
    fn test_address_order() {
        assert_eq!(
            select_addresses(interfaces(), true),
            vec!["10.0.0.5", "192.168.1.20", "fe80::1"]
        );
    }

    #[test]
    fn test_ipv6_disabled() {
        assert_eq!(
            select_addresses(interfaces(), false),
            vec!["10.0.0.5", "192.168.1.20"]
        );
    }

    #[test]
    fn test_no_address() {
        let entry = LanIp {
            name: "LAN IP".to_string(),
            options: LanIpOptions::default(),
            value: Vec::new(),
        };
        let mut sink = LineSink::new(DefaultStrings::default(), Palette::new(false));
        entry.render(&mut sink);
        assert_eq!(sink.lines()[0].1, "No Address");
    }
}
