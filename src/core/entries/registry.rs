//! Name to constructor table for every entry type.

use log::warn;
use serde_json::Value;

use super::{
    cpu, desktop_environment, disk, distro, gpu, hostname, kernel, lan_ip, load_average, model,
    packages, processes, ram, shell, temperature, terminal, uptime, user, wan_ip,
    window_manager, Constructor, Entry, Options,
};
use crate::core::context::Context;
use crate::error::Result;

/// Every entry type that can be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    User,
    Hostname,
    Model,
    Distro,
    Kernel,
    Uptime,
    LoadAverage,
    Processes,
    WindowManager,
    DesktopEnvironment,
    Shell,
    Terminal,
    Packages,
    Temperature,
    Cpu,
    Gpu,
    Ram,
    Disk,
    LanIp,
    WanIp,
}

impl EntryKind {
    /// Registry order, also the default report order
    pub const ALL: [EntryKind; 20] = [
        EntryKind::User,
        EntryKind::Hostname,
        EntryKind::Model,
        EntryKind::Distro,
        EntryKind::Kernel,
        EntryKind::Uptime,
        EntryKind::LoadAverage,
        EntryKind::Processes,
        EntryKind::WindowManager,
        EntryKind::DesktopEnvironment,
        EntryKind::Shell,
        EntryKind::Terminal,
        EntryKind::Packages,
        EntryKind::Temperature,
        EntryKind::Cpu,
        EntryKind::Gpu,
        EntryKind::Ram,
        EntryKind::Disk,
        EntryKind::LanIp,
        EntryKind::WanIp,
    ];

    /// Key used in the `type` field of descriptors
    pub fn name(self) -> &'static str {
        match self {
            EntryKind::User => "User",
            EntryKind::Hostname => "Hostname",
            EntryKind::Model => "Model",
            EntryKind::Distro => "Distro",
            EntryKind::Kernel => "Kernel",
            EntryKind::Uptime => "Uptime",
            EntryKind::LoadAverage => "LoadAverage",
            EntryKind::Processes => "Processes",
            EntryKind::WindowManager => "WindowManager",
            EntryKind::DesktopEnvironment => "DesktopEnvironment",
            EntryKind::Shell => "Shell",
            EntryKind::Terminal => "Terminal",
            EntryKind::Packages => "Packages",
            EntryKind::Temperature => "Temperature",
            EntryKind::Cpu => "CPU",
            EntryKind::Gpu => "GPU",
            EntryKind::Ram => "RAM",
            EntryKind::Disk => "Disk",
            EntryKind::LanIp => "LAN_IP",
            EntryKind::WanIp => "WAN_IP",
        }
    }

    /// Label shown when the descriptor does not set `name`
    pub fn pretty_name(self) -> &'static str {
        match self {
            EntryKind::LoadAverage => "Load Average",
            EntryKind::WindowManager => "Window Manager",
            EntryKind::DesktopEnvironment => "Desktop Environment",
            EntryKind::LanIp => "LAN IP",
            EntryKind::WanIp => "WAN IP",
            other => other.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn constructor(self) -> Constructor {
        match self {
            EntryKind::User => user::User::boxed,
            EntryKind::Hostname => hostname::Hostname::boxed,
            EntryKind::Model => model::Model::boxed,
            EntryKind::Distro => distro::Distro::boxed,
            EntryKind::Kernel => kernel::Kernel::boxed,
            EntryKind::Uptime => uptime::Uptime::boxed,
            EntryKind::LoadAverage => load_average::LoadAverage::boxed,
            EntryKind::Processes => processes::Processes::boxed,
            EntryKind::WindowManager => window_manager::WindowManager::boxed,
            EntryKind::DesktopEnvironment => desktop_environment::DesktopEnvironment::boxed,
            EntryKind::Shell => shell::Shell::boxed,
            EntryKind::Terminal => terminal::Terminal::boxed,
            EntryKind::Packages => packages::Packages::boxed,
            EntryKind::Temperature => temperature::Temperature::boxed,
            EntryKind::Cpu => cpu::Cpu::boxed,
            EntryKind::Gpu => gpu::Gpu::boxed,
            EntryKind::Ram => ram::Ram::boxed,
            EntryKind::Disk => disk::Disk::boxed,
            EntryKind::LanIp => lan_ip::LanIp::boxed,
            EntryKind::WanIp => wan_ip::WanIp::boxed,
        }
    }
}

/// A resolved descriptor, ready to be instantiated
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRequest {
    pub kind: EntryKind,
    /// Display label override
    pub name: Option<String>,
    pub options: Options,
}

impl EntryRequest {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            name: None,
            options: Options::new(),
        }
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.kind.pretty_name().to_string())
    }

    /// Run the probe. Only a fatal condition is reported as an error.
    pub fn instantiate(&self, ctx: &Context) -> Result<Box<dyn Entry>> {
        (self.kind.constructor())(self.display_name(), &self.options, ctx)
    }
}

/// Turn configuration descriptors into entry requests.
///
/// The `type` key is removed and looked up; a descriptor without a usable
/// `type` is dropped with a warning and the others are kept. Descriptors
/// with `"disabled": true` are skipped silently.
pub fn resolve_descriptors(descriptors: &[Value]) -> Vec<EntryRequest> {
    let mut requests = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let Some(mut options) = descriptor.as_object().cloned() else {
            warn!("One entry is not a JSON object ({}), it will be ignored.", descriptor);
            continue;
        };

        let kind = options
            .remove("type")
            .and_then(|entry_type| entry_type.as_str().and_then(EntryKind::from_name));

        let Some(kind) = kind else {
            warn!(
                "One entry (misses or) uses an invalid `type` field ({}).",
                descriptor.get("type").map(Value::to_string).unwrap_or_else(|| "'type'".to_string())
            );
            continue;
        };

        if options
            .remove("disabled")
            .and_then(|disabled| disabled.as_bool())
            .unwrap_or(false)
        {
            continue;
        }

        let name = match options.remove("name") {
            Some(Value::String(name)) => Some(name),
            Some(other) => {
                warn!("Ignoring non-string `name` ({}) on `{}` entry.", other, kind.name());
                None
            }
            None => None,
        };

        requests.push(EntryRequest {
            kind,
            name,
            options,
        });
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_names_resolve() {
        for kind in EntryKind::ALL {
            assert_eq!(EntryKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(EntryKind::from_name("cpu"), None);
    }

    #[test]
    fn test_pretty_names() {
        assert_eq!(EntryKind::LanIp.pretty_name(), "LAN IP");
        assert_eq!(EntryKind::Cpu.pretty_name(), "CPU");
        assert_eq!(EntryKind::LoadAverage.pretty_name(), "Load Average");
    }

    #[test]
    fn test_invalid_types_are_skipped() {
        let descriptors = vec![
            json!({"type": "CPU", "one_line": true}),
            json!({"type": "Nope"}),
            json!({"no_type": 1}),
            json!({"type": 42}),
            json!("RAM"),
            json!({"type": "RAM"}),
        ];

        let requests = resolve_descriptors(&descriptors);
        let kinds: Vec<EntryKind> = requests.iter().map(|r| r.kind).collect();

        assert_eq!(kinds, vec![EntryKind::Cpu, EntryKind::Ram]);
        assert_eq!(requests[0].options.get("one_line"), Some(&json!(true)));
        assert!(!requests[0].options.contains_key("type"));
    }

    #[test]
    fn test_name_and_disabled() {
        let descriptors = vec![
            json!({"type": "Disk", "name": "Storage"}),
            json!({"type": "GPU", "disabled": true}),
            json!({"type": "Shell", "disabled": false}),
        ];

        let requests = resolve_descriptors(&descriptors);

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].display_name(), "Storage");
        assert_eq!(requests[1].display_name(), "Shell");
        assert!(requests[1].options.is_empty());
    }
}
