//! 1, 5 and 15 minute load averages.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_options, Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::ui::colors::get_level_color;
use crate::ui::lines::LineSink;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoadAverageOptions {
    pub decimal_places: u32,
    pub warning_threshold: f64,
    pub danger_threshold: f64,
}

impl Default for LoadAverageOptions {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            warning_threshold: 1.0,
            danger_threshold: 2.0,
        }
    }
}

pub struct LoadAverage {
    name: String,
    options: LoadAverageOptions,
    value: Option<[f64; 3]>,
}

impl LoadAverage {
    pub fn new(name: String, options: &Options, _ctx: &Context) -> Self {
        let options = parse_options(&name, options);
        Self {
            name,
            options,
            value: system_load_average(),
        }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

#[cfg(unix)]
fn system_load_average() -> Option<[f64; 3]> {
    let load = sysinfo::System::load_average();
    Some([load.one, load.five, load.fifteen])
}

#[cfg(not(unix))]
fn system_load_average() -> Option<[f64; 3]> {
    None
}

/// Round to `places` decimals and print the shortest representation,
/// always keeping at least one decimal (`1.0`, `0.25`)
pub(crate) fn format_rounded(value: f64, places: u32) -> String {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;

    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

impl Entry for LoadAverage {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        match self.value {
            Some(load) => json!(load),
            None => Value::Null,
        }
    }

    fn render(&self, sink: &mut LineSink) {
        let Some(load) = self.value else {
            let not_detected = sink.default_strings().not_detected.clone();
            sink.append(&self.name, not_detected);
            return;
        };

        let palette = sink.palette();
        let text = load
            .iter()
            .map(|value| {
                let color = get_level_color(
                    *value,
                    self.options.warning_threshold,
                    self.options.danger_threshold,
                );
                palette.paint(color, format_rounded(*value, self.options.decimal_places))
            })
            .collect::<Vec<_>>()
            .join(" ");

        sink.append(&self.name, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DefaultStrings;
    use crate::ui::colors::Palette;

    fn entry(value: Option<[f64; 3]>) -> LoadAverage {
        LoadAverage {
            name: "Load Average".to_string(),
            options: LoadAverageOptions::default(),
            value,
        }
    }

    #[test]
    fn test_format_rounded() {
        assert_eq!(format_rounded(1.0, 2), "1.0");
        assert_eq!(format_rounded(0.1234, 2), "0.12");
        assert_eq!(format_rounded(0.5, 2), "0.5");
        assert_eq!(format_rounded(2.71828, 0), "3.0");
    }

    #[test]
    fn test_render_plain() {
        let mut sink = LineSink::new(DefaultStrings::default(), Palette::new(false));
        entry(Some([0.5, 1.25, 2.0])).render(&mut sink);
        assert_eq!(sink.lines()[0].1, "0.5 1.25 2.0");
    }

    #[test]
    fn test_render_colored() {
        let mut sink = LineSink::new(DefaultStrings::default(), Palette::new(true));
        entry(Some([0.5, 1.5, 3.0])).render(&mut sink);
        assert_eq!(
            sink.lines()[0].1,
            "\x1b[32m0.5\x1b[0m \x1b[33m1.5\x1b[0m \x1b[31m3.0\x1b[0m"
        );
    }

    #[test]
    fn test_invalid_options_fall_back() {
        let options: Options = serde_json::from_value(json!({"decimal_places": "two"})).unwrap();
        let parsed: LoadAverageOptions = parse_options("Load Average", &options);
        assert_eq!(parsed.decimal_places, 2);
    }

    #[test]
    fn test_not_detected() {
        let mut sink = LineSink::new(DefaultStrings::default(), Palette::new(false));
        let entry = entry(None);
        entry.render(&mut sink);
        assert!(entry.value().is_null());
        assert_eq!(sink.lines()[0].1, "Not detected");
    }
}
