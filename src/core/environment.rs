//! Snapshot of the environment flags that steer a run.

use std::env;

/// Colour and tracking flags, read once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    /// `NO_COLOR` is present (any value)
    pub no_color: bool,
    /// `CLICOLOR` is not `0`
    pub clicolor: bool,
    /// `CLICOLOR_FORCE` is set to something other than `0`
    pub clicolor_force: bool,
    /// `DO_NOT_TRACK` is `1`: no outbound network request is made
    pub do_not_track: bool,
}

impl Environment {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the snapshot from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            no_color: lookup("NO_COLOR").is_some(),
            clicolor: lookup("CLICOLOR").as_deref() != Some("0"),
            clicolor_force: lookup("CLICOLOR_FORCE").as_deref().unwrap_or("0") != "0",
            do_not_track: lookup("DO_NOT_TRACK").as_deref() == Some("1"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
