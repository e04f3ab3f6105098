//! Memory usage.

use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;

use super::{parse_options, Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::command;
use crate::ui::colors::get_level_color;
use crate::ui::lines::LineSink;

const MEMINFO_PATH: &str = "/proc/meminfo";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RamOptions {
    pub warning_use_percent: f64,
    pub danger_use_percent: f64,
}

impl Default for RamOptions {
    fn default() -> Self {
        Self {
            warning_use_percent: 33.3,
            danger_use_percent: 66.7,
        }
    }
}

/// Used and total memory, in MiB
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryUsage {
    pub used: f64,
    pub total: f64,
}

pub struct Ram {
    name: String,
    options: RamOptions,
    value: Option<MemoryUsage>,
}

impl Ram {
    pub fn new(name: String, options: &Options, _ctx: &Context) -> Self {
        let options = parse_options(&name, options);

        let mut value = None;
        if cfg!(target_os = "linux") {
            value = command::check_output("free", &["-m"]).and_then(|output| parse_free_output(&output));
        }
        if value.is_none() {
            value = fs::read_to_string(MEMINFO_PATH)
                .ok()
                .and_then(|meminfo| parse_proc_meminfo(&meminfo));
        }

        Self {
            name,
            options,
            value: value.filter(|usage| usage.total > 0.0),
        }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

/// Read the `Mem` row of `free -m`: total is the first column, used the second
pub fn parse_free_output(output: &str) -> Option<MemoryUsage> {
    let row: String = output.lines().filter(|line| line.contains("Mem")).collect();
    let fields: Vec<&str> = row.split_whitespace().collect();

    let total = fields.get(1)?.parse().ok()?;
    let used = fields.get(2)?.parse().ok()?;

    Some(MemoryUsage { used, total })
}

/// Compute usage from `/proc/meminfo` the way `htop` does.
pub fn parse_proc_meminfo(meminfo: &str) -> Option<MemoryUsage> {
    let fields: HashMap<&str, f64> = meminfo
        .lines()
        .filter_map(|line| line.split_once(':'))
        .filter_map(|(key, value)| {
            let value = value.trim_matches(|c| c == ' ' || c == 'k' || c == 'B');
            value.parse::<f64>().ok().map(|kib| (key, kib / 1024.0))
        })
        .collect();

    let field = |key: &str| fields.get(key).copied();

    let total = field("MemTotal")?;
    let free = field("MemFree")?;

    let mut used = total + field("Shmem")?
        - (free + field("Cached")? + field("SReclaimable")? + field("Buffers")?);
    if used < 0.0 {
        used = total - free;
    }

    Some(MemoryUsage { used, total })
}

impl Entry for Ram {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        match self.value {
            Some(usage) => json!({
                "used": usage.used,
                "total": usage.total,
                "unit": "MiB",
            }),
            None => Value::Null,
        }
    }

    fn render(&self, sink: &mut LineSink) {
        let Some(usage) = self.value else {
            let not_detected = sink.default_strings().not_detected.clone();
            sink.append(&self.name, not_detected);
            return;
        };

        let percent = usage.used / usage.total * 100.0;
        let color = get_level_color(
            percent,
            self.options.warning_use_percent,
            self.options.danger_use_percent,
        );

        let palette = sink.palette();
        sink.append(
            &self.name,
            format!(
                "{} / {} MiB",
                palette.paint(color, format!("{} MiB", usage.used as i64)),
                usage.total as i64
            ),
        );
    }
}
