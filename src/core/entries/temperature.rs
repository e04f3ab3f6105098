//! Hardware temperatures from `lm-sensors`, or thermal zones on Linux.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use super::{parse_options, Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::command::{self, CommandOutcome};
use crate::ui::lines::LineSink;

const THERMAL_ROOT: &str = "/sys/class/thermal";

static TEMP_INPUT_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^temp\d_input").expect("valid sensor pattern"));

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemperatureOptions {
    pub use_fahrenheit: bool,
    pub char_before_unit: String,
    /// Chips passed to `sensors`; all of them when empty
    pub sensors_chipsets: Vec<String>,
    /// Features whose readings are ignored
    pub sensors_excluded_subfeatures: Vec<String>,
}

impl Default for TemperatureOptions {
    fn default() -> Self {
        Self {
            use_fahrenheit: false,
            char_before_unit: " ".to_string(),
            sensors_chipsets: Vec::new(),
            sensors_excluded_subfeatures: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub max_temperature: f64,
    pub unit: &'static str,
    /// Number of sensors the mean was computed over
    pub count: usize,
}

pub struct Temperature {
    name: String,
    options: TemperatureOptions,
    value: Option<Reading>,
}

impl Temperature {
    pub fn new(name: String, options: &Options, _ctx: &Context) -> Self {
        let options: TemperatureOptions = parse_options(&name, options);

        let mut temps = run_sensors(&options.sensors_chipsets, &options.sensors_excluded_subfeatures);
        if temps.is_empty() && cfg!(target_os = "linux") {
            temps = read_thermal_zones(Path::new(THERMAL_ROOT));
        }

        let value = summarize(&temps, options.use_fahrenheit);
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

fn log_sensors_stderr(stderr: &str) {
    for line in stderr.lines().filter(|line| !line.is_empty()) {
        warn!("[lm-sensors]: {}", line);
    }
}

fn run_sensors(chipsets: &[String], excluded_subfeatures: &[String]) -> Vec<f64> {
    let chipsets: Vec<Option<&str>> = if chipsets.is_empty() {
        vec![None]
    } else {
        chipsets.iter().map(|chip| Some(chip.as_str())).collect()
    };

    let mut temps = Vec::new();

    for chipset in chipsets {
        let mut args = vec!["-A", "-j"];
        args.extend(chipset);

        let output = match command::run("sensors", &args) {
            CommandOutcome::Missing => return temps,
            CommandOutcome::Failed { stderr } => {
                log_sensors_stderr(&stderr);
                continue;
            }
            CommandOutcome::Success { stdout, stderr } => {
                log_sensors_stderr(&stderr);
                stdout
            }
        };

        match serde_json::from_str::<Value>(&output) {
            Ok(document) => temps.extend(parse_sensors_output(&document, excluded_subfeatures)),
            Err(e) => warn!("[lm-sensors]: Couldn't decode JSON ({}).", e),
        }
    }

    temps
}

/// First non-zero `tempN_input` reading of every feature
pub fn parse_sensors_output(document: &Value, excluded_subfeatures: &[String]) -> Vec<f64> {
    let mut temps = Vec::new();

    let Some(chips) = document.as_object() else {
        return temps;
    };

    for features in chips.values().filter_map(Value::as_object) {
        for (feature_name, subfeatures) in features {
            if excluded_subfeatures.iter().any(|excluded| excluded == feature_name) {
                continue;
            }
            let Some(subfeatures) = subfeatures.as_object() else {
                continue;
            };

            let reading = subfeatures.iter().find_map(|(name, value)| {
                let value = value.as_f64()?;
                (value != 0.0 && TEMP_INPUT_REGEXP.is_match(name)).then_some(value)
            });
            temps.extend(reading);
        }
    }

    temps
}

/// Non-zero `thermal_zone*/temp` readings, in degrees
pub fn read_thermal_zones(root: &Path) -> Vec<f64> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("thermal_zone"))
        .filter_map(|entry| fs::read_to_string(entry.path().join("temp")).ok())
        .filter_map(|content| content.trim().parse::<f64>().ok())
        .filter(|millidegrees| *millidegrees != 0.0)
        .map(|millidegrees| millidegrees / 1000.0)
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Mean and maximum over all readings, rounded to one decimal
pub fn summarize(temps: &[f64], use_fahrenheit: bool) -> Option<Reading> {
    if temps.is_empty() {
        return None;
    }

    let temps: Vec<f64> = if use_fahrenheit {
        temps.iter().copied().map(to_fahrenheit).collect()
    } else {
        temps.to_vec()
    };

    let mean = temps.iter().sum::<f64>() / temps.len() as f64;
    let max = temps.iter().copied().fold(f64::MIN, f64::max);

    Some(Reading {
        temperature: round1(mean),
        max_temperature: round1(max),
        unit: if use_fahrenheit { "F" } else { "C" },
        count: temps.len(),
    })
}

impl Entry for Temperature {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        match &self.value {
            Some(reading) => json!({
                "temperature": reading.temperature,
                "max_temperature": reading.max_temperature,
                "unit": reading.unit,
            }),
            None => Value::Null,
        }
    }

    fn render(&self, sink: &mut LineSink) {
        let Some(reading) = &self.value else {
            let not_detected = sink.default_strings().not_detected.clone();
            sink.append(&self.name, not_detected);
            return;
        };

        let unit = format!("{}{}", self.options.char_before_unit, reading.unit);
        let mut text = format!("{:.1}{}", reading.temperature, unit);
        if reading.count > 1 {
            text.push_str(&format!(" (Max. {:.1}{})", reading.max_temperature, unit));
        }

        sink.append(&self.name, text);
    }
}
