//! Time since boot.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use std::fs;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::{GlanceError, Result};
use crate::platform::command::{self, CommandOutcome};
use crate::ui::lines::LineSink;

const PROC_UPTIME_PATH: &str = "/proc/uptime";

/// Matches the various `uptime` output formats (procps, BSD, busybox)
static UPTIME_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        up\s+?
        (?:(?P<days>\d+?)\s+?days?[,\s]+?)?
        (?:
            (?:(?P<hours>\d+?)(?::|\s+?hrs?))?
            (?:
                (?P<minutes>\d+?)(?:\s+?mins?)?
                |
                (?P<seconds>\d+?)\s+?secs?
            )?
        )?
        [,\s]*?
        \d+?\s+?user",
    )
    .expect("valid uptime pattern")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Duration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Duration {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }
}

pub struct Uptime {
    name: String,
    value: Duration,
}

impl Uptime {
    /// Fails only when every source is exhausted and `uptime` itself is
    /// missing or produced unparsable output.
    pub fn new(name: String, _options: &Options, _ctx: &Context) -> Result<Self> {
        let seconds = fs::read_to_string(PROC_UPTIME_PATH)
            .ok()
            .and_then(|content| parse_proc_uptime(&content))
            .or_else(|| Some(sysinfo::System::uptime()).filter(|seconds| *seconds > 0));

        let value = match seconds {
            Some(seconds) => Duration::from_seconds(seconds),
            None => uptime_cmd()?,
        };

        Ok(Self { name, value })
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)?))
    }
}

/// Whole seconds from the first field of `/proc/uptime`
fn parse_proc_uptime(content: &str) -> Option<u64> {
    let seconds: f64 = content.split_whitespace().next()?.parse().ok()?;
    (seconds >= 0.0).then(|| seconds as u64)
}

fn uptime_cmd() -> Result<Duration> {
    let output = match command::run("uptime", &[]) {
        CommandOutcome::Missing => {
            return Err(GlanceError::sys_info(
                "Couldn't find `uptime` command on this system.",
            ))
        }
        CommandOutcome::Failed { stderr } => {
            log_uptime_stderr(&stderr);
            return Err(GlanceError::sys_info("Couldn't parse `uptime` output."));
        }
        CommandOutcome::Success { stdout, stderr } => {
            log_uptime_stderr(&stderr);
            stdout
        }
    };

    parse_uptime_output(&output)
        .ok_or_else(|| GlanceError::sys_info("Couldn't parse `uptime` output."))
}

fn log_uptime_stderr(stderr: &str) {
    for line in stderr.lines().filter(|line| !line.is_empty()) {
        warn!("[uptime]: {}", line);
    }
}

/// Extract the duration from an `uptime` line
pub fn parse_uptime_output(output: &str) -> Option<Duration> {
    let captures = UPTIME_REGEXP.captures(output)?;
    let group = |name: &str| {
        captures
            .name(name)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    Some(Duration {
        days: group("days"),
        hours: group("hours"),
        minutes: group("minutes"),
        seconds: group("seconds"),
    })
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Human form: `2 days, 3 hours and 4 minutes`, `< 1 minute` below a minute
pub fn format_duration(duration: &Duration) -> String {
    let mut parts = Vec::new();

    if duration.days > 0 {
        parts.push(plural(duration.days, "day"));
    }
    if duration.hours > 0 {
        parts.push(plural(duration.hours, "hour"));
    }
    if duration.minutes > 0 {
        parts.push(plural(duration.minutes, "minute"));
    }

    match parts.len() {
        0 => "< 1 minute".to_string(),
        1 => parts.remove(0),
        _ => {
            let last = parts.pop().unwrap_or_default();
            format!("{} and {}", parts.join(", "), last)
        }
    }
}

impl Entry for Uptime {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        json!({
            "days": self.value.days,
            "hours": self.value.hours,
            "minutes": self.value.minutes,
            "seconds": self.value.seconds,
        })
    }

    fn render(&self, sink: &mut LineSink) {
        sink.append(&self.name, format_duration(&self.value));
    }
}
