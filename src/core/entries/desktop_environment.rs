//! Running desktop environment.

use serde_json::Value;
use std::env;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::core::processes::Processes;
use crate::error::Result;

/// Session process name to display name
const DE_DICT: [(&str, &str); 10] = [
    ("cinnamon", "Cinnamon"),
    ("dde-dock", "Deepin"),
    ("fur-box-session", "Fur Box"),
    ("gnome-session", "GNOME"),
    ("gnome-shell", "GNOME"),
    ("ksmserver", "KDE"),
    ("lxqt-session", "LXQt"),
    ("lxsession", "LXDE"),
    ("mate-session", "MATE"),
    ("xfce4-session", "Xfce"),
];

pub struct DesktopEnvironment {
    name: String,
    value: Option<String>,
}

impl DesktopEnvironment {
    pub fn new(name: String, _options: &Options, ctx: &Context) -> Self {
        let value = from_processes(&ctx.processes).or_else(|| {
            env::var("XDG_CURRENT_DESKTOP")
                .ok()
                .filter(|desktop| !desktop.is_empty())
        });

        Self { name, value }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

fn from_processes(processes: &Processes) -> Option<String> {
    DE_DICT
        .iter()
        .find(|(process, _)| processes.contains(process))
        .map(|(_, de_name)| de_name.to_string())
}

impl Entry for DesktopEnvironment {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        self.value.clone().map(Value::String).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_process_lookup() {
        let processes = Processes::from_names(["systemd", "ksmserver", "plasmashell"]);
        assert_eq!(from_processes(&processes).as_deref(), Some("KDE"));

        let processes = Processes::from_names(["gnome-shell"]);
        assert_eq!(from_processes(&processes).as_deref(), Some("GNOME"));

        assert_eq!(from_processes(&Processes::default()), None);
    }
}
