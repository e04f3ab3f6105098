//! Public addresses, resolved through DNS first and HTTPS second.

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{append_items, parse_options, Entry, Options, Toggle};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::{command, http};
use crate::ui::lines::LineSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    fn dig_flag(self) -> &'static str {
        match self {
            IpVersion::V4 => "-4",
            IpVersion::V6 => "-6",
        }
    }

    fn record_type(self) -> &'static str {
        match self {
            IpVersion::V4 => "A",
            IpVersion::V6 => "AAAA",
        }
    }

    fn default_http_url(self) -> &'static str {
        match self {
            IpVersion::V4 => "https://v4.ident.me/",
            IpVersion::V6 => "https://v6.ident.me/",
        }
    }
}

/// Lookup settings for one IP version
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IpLookupOptions {
    pub dns_query: Toggle<String>,
    pub dns_resolver: String,
    pub dns_timeout: f64,
    pub http_url: Toggle<String>,
    pub http_timeout: f64,
}

impl Default for IpLookupOptions {
    fn default() -> Self {
        Self {
            dns_query: Toggle::Flag(true),
            dns_resolver: "resolver1.opendns.com".to_string(),
            dns_timeout: 1.0,
            http_url: Toggle::Flag(true),
            http_timeout: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WanIpOptions {
    pub ipv4: Toggle<IpLookupOptions>,
    pub ipv6: Toggle<IpLookupOptions>,
    pub one_line: bool,
}

impl Default for WanIpOptions {
    fn default() -> Self {
        Self {
            ipv4: Toggle::Flag(true),
            ipv6: Toggle::Flag(true),
            one_line: true,
        }
    }
}

const DEFAULT_DNS_QUERY: &str = "myip.opendns.com";

pub struct WanIp {
    name: String,
    options: WanIpOptions,
    do_not_track: bool,
    value: Vec<String>,
}

impl WanIp {
    pub fn new(name: String, options: &Options, ctx: &Context) -> Self {
        let options: WanIpOptions = parse_options(&name, options);
        let do_not_track = ctx.env.do_not_track;

        let mut value = Vec::new();
        if !do_not_track {
            let lookups = [
                (IpVersion::V4, options.ipv4.clone()),
                (IpVersion::V6, options.ipv6.clone()),
            ];
            for (version, lookup) in lookups {
                let Some(lookup) = lookup.resolve(IpLookupOptions::default()) else {
                    continue;
                };
                value.extend(retrieve_ip_address(version, &lookup));
            }
        }

        Self {
            name,
            options,
            do_not_track,
            value,
        }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

fn retrieve_ip_address(version: IpVersion, lookup: &IpLookupOptions) -> Option<String> {
    if let Some(query) = lookup.dns_query.clone().resolve(DEFAULT_DNS_QUERY.to_string()) {
        let timeout = http::timeout_from_secs(lookup.dns_timeout);
        if let Some(address) = run_dns_query(version, &query, &lookup.dns_resolver, timeout) {
            return Some(address);
        }
    }

    let url = lookup
        .http_url
        .clone()
        .resolve(version.default_http_url().to_string())?;
    match http::fetch_text(&url, http::timeout_from_secs(lookup.http_timeout)) {
        Ok(address) if !address.is_empty() => Some(address),
        Ok(_) => None,
        Err(e) => {
            debug!("{:#}", e);
            None
        }
    }
}

fn run_dns_query(version: IpVersion, query: &str, resolver: &str, timeout: Duration) -> Option<String> {
    let resolver = format!("@{}", resolver);
    let output = command::output_with_timeout(
        "dig",
        &["+short", version.dig_flag(), version.record_type(), query, &resolver],
        timeout,
    )?;

    first_answer(&output)
}

/// First non-empty line of `dig +short` output
fn first_answer(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

impl Entry for WanIp {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        Value::from(self.value.clone())
    }

    fn render(&self, sink: &mut LineSink) {
        if self.value.is_empty() {
            let strings = sink.default_strings();
            let text = if self.do_not_track {
                strings.not_detected.clone()
            } else {
                strings.no_address.clone()
            };
            sink.append(&self.name, text);
            return;
        }

        append_items(sink, &self.name, &self.value, self.options.one_line);
    }
}
