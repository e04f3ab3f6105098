//! Process-wide state shared, read-only, by every entry.

use crate::core::config::DefaultStrings;
use crate::core::distributions::OsRelease;
use crate::core::environment::Environment;
use crate::core::processes::Processes;

/// Everything computed once before the entries are loaded
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub env: Environment,
    pub processes: Processes,
    pub os_release: OsRelease,
    pub default_strings: DefaultStrings,
}

impl Context {
    /// Capture the environment flags, process list and `os-release`
    pub fn collect(default_strings: DefaultStrings) -> Self {
        Self {
            env: Environment::from_env(),
            processes: Processes::collect(),
            os_release: OsRelease::load(),
            default_strings,
        }
    }
}
