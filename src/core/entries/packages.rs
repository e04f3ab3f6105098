//! Installed package count, summed over every package manager found.

use serde_json::Value;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::command;

struct PackageTool {
    program: &'static str,
    args: &'static [&'static str],
    /// Header lines printed before the package list
    skew: usize,
}

const PACKAGE_TOOLS: [PackageTool; 6] = [
    PackageTool {
        program: "apk",
        args: &["list", "--installed"],
        skew: 0,
    },
    PackageTool {
        program: "dpkg",
        args: &["--get-selections"],
        skew: 0,
    },
    PackageTool {
        program: "pacman",
        args: &["-Q"],
        skew: 0,
    },
    PackageTool {
        program: "yum",
        args: &["list", "installed"],
        skew: 2,
    },
    PackageTool {
        program: "flatpak",
        args: &["list"],
        skew: 0,
    },
    PackageTool {
        program: "snap",
        args: &["list"],
        skew: 1,
    },
];

pub struct Packages {
    name: String,
    value: Option<usize>,
}

impl Packages {
    pub fn new(name: String, _options: &Options, _ctx: &Context) -> Self {
        let mut value: Option<usize> = None;

        for tool in &PACKAGE_TOOLS {
            let Some(output) = command::check_output(tool.program, tool.args) else {
                continue;
            };
            let count = count_packages(tool.program, &output, tool.skew);
            value = Some(value.unwrap_or(0) + count);
        }

        Self { name, value }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

/// Number of listed packages in one tool's output
fn count_packages(program: &str, output: &str, skew: usize) -> usize {
    let mut count = output.matches('\n').count();

    // `dpkg` also lists removed packages whose configuration is left behind.
    if program == "dpkg" {
        count = count.saturating_sub(output.matches("deinstall").count());
    }

    count.saturating_sub(skew)
}

impl Entry for Packages {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        self.value.map(Value::from).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_count() {
        assert_eq!(count_packages("pacman", "bash 5.2\ncoreutils 9.4\nlinux 6.6\n", 0), 3);
    }

    #[test]
    fn test_dpkg_deinstalled_are_ignored() {
        let output = "adduser\t\t\t\t\tinstall\nold-kernel\t\t\t\tdeinstall\nzsh\t\t\t\t\tinstall\n";
        assert_eq!(count_packages("dpkg", output, 0), 2);
    }

    #[test]
    fn test_header_skew() {
        let output = "Loaded plugins: fastestmirror\nInstalled Packages\nbash.x86_64\nvim.x86_64\n";
        assert_eq!(count_packages("yum", output, 2), 2);
        assert_eq!(count_packages("snap", "", 1), 0);
    }
}
