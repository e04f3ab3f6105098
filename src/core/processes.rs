//! Process list, captured once before the probes run.

use log::warn;

use crate::platform::command::{self, CommandOutcome};

/// Command names of the running processes (`ps -eo comm`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Processes {
    names: Vec<String>,
}

impl Processes {
    pub fn collect() -> Self {
        match command::run("ps", &["-eo", "comm"]) {
            CommandOutcome::Success { stdout, .. } => Self::from_ps_output(&stdout),
            CommandOutcome::Missing => {
                warn!("`procps` (or `procps-ng`) couldn't be found on your system.");
                Self::default()
            }
            CommandOutcome::Failed { stderr } => {
                warn!(
                    "This implementation of `ps` might not be supported : {}",
                    stderr.trim_end()
                );
                Self::default()
            }
        }
    }

    /// Parse `ps -eo comm` output, skipping the header line
    pub fn from_ps_output(output: &str) -> Self {
        Self {
            names: output.lines().skip(1).map(str::to_string).collect(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn number(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|process| process == name)
    }
}
