//! Filesystem usage from `df`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::HashSet;

use super::{parse_options, Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::command;
use crate::ui::colors::get_level_color;
use crate::ui::lines::LineSink;

static DF_ROW_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?mx)
        ^(?P<device_path>.+?)\s+
        (?P<total_blocks>\d+)\s+
        (?P<used_blocks>\d+)\s+
        \d+\s+
        \d+%\s+
        (?P<mount_point>.*)$",
    )
    .expect("valid df pattern")
});

/// Loop devices, vnode disks, `lofi` and device-mapper targets
static VIRTUAL_DEVICE_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"loop|[rs]?vnd|lofi|dm").expect("valid device pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiskLabels {
    MountPoints,
    DevicePaths,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiskOptions {
    /// `["local"]`, or mount points and device paths to show
    pub show_filesystems: Vec<String>,
    pub combine_total: bool,
    pub disk_labels: Option<DiskLabels>,
    pub hide_entry_name: bool,
    pub warning_use_percent: f64,
    pub danger_use_percent: f64,
}

impl Default for DiskOptions {
    fn default() -> Self {
        Self {
            show_filesystems: vec!["local".to_string()],
            combine_total: true,
            disk_labels: None,
            hide_entry_name: false,
            warning_use_percent: 50.0,
            danger_use_percent: 75.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filesystem {
    pub mount_point: String,
    pub device_path: String,
    /// 1 KiB blocks
    pub used_blocks: u64,
    pub total_blocks: u64,
}

pub struct Disk {
    name: String,
    options: DiskOptions,
    value: Vec<Filesystem>,
}

impl Disk {
    pub fn new(name: String, options: &Options, _ctx: &Context) -> Self {
        let options: DiskOptions = parse_options(&name, options);

        let filesystems = command::check_output("df", &["-P", "-k"])
            .map(|output| parse_df_output(&output))
            .unwrap_or_default();

        let value = if options.show_filesystems == ["local"] {
            local_filesystems(filesystems)
        } else {
            specified_filesystems(filesystems, &options.show_filesystems)
        };

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

/// Rows of `df -P -k`, keyed by mount point; empty filesystems are skipped
pub fn parse_df_output(output: &str) -> Vec<Filesystem> {
    let mut filesystems: Vec<Filesystem> = Vec::new();

    for captures in DF_ROW_REGEXP.captures_iter(output) {
        let (Ok(total_blocks), Ok(used_blocks)) = (
            captures["total_blocks"].parse::<u64>(),
            captures["used_blocks"].parse::<u64>(),
        ) else {
            continue;
        };
        if total_blocks == 0 {
            continue;
        }

        let filesystem = Filesystem {
            mount_point: captures["mount_point"].to_string(),
            device_path: captures["device_path"].to_string(),
            used_blocks,
            total_blocks,
        };

        match filesystems
            .iter_mut()
            .find(|known| known.mount_point == filesystem.mount_point)
        {
            Some(known) => *known = filesystem,
            None => filesystems.push(filesystem),
        }
    }

    filesystems
}

fn is_local_device(device_path: &str) -> bool {
    match device_path.strip_prefix("/dev/") {
        Some(name) => !name.is_empty() && !VIRTUAL_DEVICE_REGEXP.is_match(name),
        None => false,
    }
}

/// Physical `/dev/` devices only, each device once
pub fn local_filesystems(filesystems: Vec<Filesystem>) -> Vec<Filesystem> {
    let mut seen_devices = HashSet::new();

    filesystems
        .into_iter()
        .filter(|filesystem| is_local_device(&filesystem.device_path))
        .filter(|filesystem| seen_devices.insert(filesystem.device_path.clone()))
        .collect()
}

/// Filesystems whose mount point or device path was asked for
pub fn specified_filesystems(filesystems: Vec<Filesystem>, wanted: &[String]) -> Vec<Filesystem> {
    filesystems
        .into_iter()
        .filter(|filesystem| {
            wanted
                .iter()
                .any(|name| *name == filesystem.mount_point || *name == filesystem.device_path)
        })
        .collect()
}

/// `1024` KiB blocks to `"1.0 MiB"`
pub fn blocks_to_human_readable(blocks: f64) -> String {
    const UNITS: [&str; 6] = ["Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

    let mut value = blocks;
    let mut unit = UNITS[0];
    for next_unit in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next_unit;
    }

    format!("{:.1} {}B", value, unit)
}

impl Disk {
    fn usage_text(&self, sink: &LineSink, used: u64, total: u64) -> String {
        let percent = used as f64 / total as f64 * 100.0;
        let color = get_level_color(
            percent,
            self.options.warning_use_percent,
            self.options.danger_use_percent,
        );
        let palette = sink.palette();

        format!(
            "{} / {}",
            palette.paint(color, blocks_to_human_readable(used as f64)),
            blocks_to_human_readable(total as f64)
        )
    }

    fn label_for(&self, filesystem: &Filesystem) -> String {
        let disk_label = match self.options.disk_labels {
            Some(DiskLabels::MountPoints) => Some(&filesystem.mount_point),
            Some(DiskLabels::DevicePaths) => Some(&filesystem.device_path),
            None => None,
        };

        match (disk_label, self.options.hide_entry_name) {
            (Some(label), true) => label.clone(),
            (Some(label), false) => format!("{} ({})", self.name, label),
            (None, _) => self.name.clone(),
        }
    }
}

impl Entry for Disk {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        let mounts: Map<String, Value> = self
            .value
            .iter()
            .map(|filesystem| {
                (
                    filesystem.mount_point.clone(),
                    json!({
                        "device_path": filesystem.device_path,
                        "used_blocks": filesystem.used_blocks,
                        "total_blocks": filesystem.total_blocks,
                    }),
                )
            })
            .collect();
        Value::Object(mounts)
    }

    fn render(&self, sink: &mut LineSink) {
        if self.value.is_empty() {
            let not_detected = sink.default_strings().not_detected.clone();
            sink.append(&self.name, not_detected);
            return;
        }

        if self.options.combine_total {
            let used = self.value.iter().map(|fs| fs.used_blocks).sum();
            let total = self.value.iter().map(|fs| fs.total_blocks).sum();
            let text = self.usage_text(sink, used, total);
            sink.append(&self.name, text);
            return;
        }

        for filesystem in &self.value {
            let text = self.usage_text(sink, filesystem.used_blocks, filesystem.total_blocks);
            sink.append(self.label_for(filesystem), text);
        }
    }
}
