//! Graphics controllers listed by `lspci`.

use serde::Deserialize;
use serde_json::Value;

use super::{append_items, parse_options, Entry, Options, Toggle};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::command;
use crate::ui::lines::LineSink;

/// Device classes, most relevant first
const VIDEO_CLASSES: [&str; 3] = ["3D", "VGA", "Display"];

const DEFAULT_MAX_COUNT: usize = 2;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GpuOptions {
    pub one_line: bool,
    pub max_count: Toggle<usize>,
}

impl Default for GpuOptions {
    fn default() -> Self {
        Self {
            one_line: false,
            max_count: Toggle::Value(DEFAULT_MAX_COUNT),
        }
    }
}

pub struct Gpu {
    name: String,
    options: GpuOptions,
    value: Vec<String>,
}

impl Gpu {
    pub fn new(name: String, options: &Options, _ctx: &Context) -> Self {
        let options: GpuOptions = parse_options(&name, options);

        let mut value = if cfg!(target_os = "linux") {
            command::check_output("lspci", &[])
                .map(|output| parse_lspci_output(&output))
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        if let Some(max_count) = options.max_count.clone().resolve(DEFAULT_MAX_COUNT) {
            value.truncate(max_count);
        }

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

/// Device names of video controllers, grouped by class
pub fn parse_lspci_output(output: &str) -> Vec<String> {
    let mut devices = Vec::new();

    for video_class in VIDEO_CLASSES {
        for line in output.lines().filter(|line| line.contains(video_class)) {
            if let Some((_, device)) = line.split_once(": ") {
                devices.push(device.to_string());
            }
        }
    }

    devices
}

impl Entry for Gpu {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        Value::from(self.value.clone())
    }

    fn render(&self, sink: &mut LineSink) {
        if self.value.is_empty() {
            let not_detected = sink.default_strings().not_detected.clone();
            sink.append(&self.name, not_detected);
            return;
        }

        append_items(sink, &self.name, &self.value, self.options.one_line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DefaultStrings;
    use crate::ui::colors::Palette;
    use serde_json::json;

    const LSPCI: &str = "00:00.0 Host bridge: Intel Corporation 8th Gen Core Processor Host Bridge/DRAM Registers (rev 07)
00:02.0 VGA compatible controller: Intel Corporation UHD Graphics 630 (Desktop)
01:00.0 3D controller: NVIDIA Corporation TU117M [GeForce GTX 1650 Mobile / Max-Q] (rev a1)
02:00.0 Display controller: Advanced Micro Devices, Inc. [AMD/ATI] Device 1234
";

    #[test]
    fn test_lspci_class_order() {
        assert_eq!(
            parse_lspci_output(LSPCI),
            vec![
                "NVIDIA Corporation TU117M [GeForce GTX 1650 Mobile / Max-Q] (rev a1)",
                "Intel Corporation UHD Graphics 630 (Desktop)",
                "Advanced Micro Devices, Inc. [AMD/ATI] Device 1234",
            ]
        );
    }

    #[test]
    fn test_max_count_option() {
        let options: Options = serde_json::from_value(json!({"max_count": false})).unwrap();
        let parsed: GpuOptions = parse_options("GPU", &options);
        assert_eq!(parsed.max_count.resolve(DEFAULT_MAX_COUNT), None);

        let parsed: GpuOptions = parse_options("GPU", &Options::new());
        assert_eq!(parsed.max_count.resolve(DEFAULT_MAX_COUNT), Some(2));
    }

    #[test]
    fn test_render_one_line() {
        let entry = Gpu {
            name: "GPU".to_string(),
            options: GpuOptions {
                one_line: true,
                ..GpuOptions::default()
            },
            value: vec!["A".to_string(), "B".to_string()],
        };
        let mut sink = LineSink::new(DefaultStrings::default(), Palette::new(false));
        entry.render(&mut sink);
        assert_eq!(sink.into_lines(), vec![("GPU".to_string(), "A, B".to_string())]);
    }
}
