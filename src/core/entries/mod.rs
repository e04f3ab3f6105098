//! Entries: one probe per category of system fact.
//!
//! Each entry gathers its value once, at construction, trying its data
//! sources in order and settling on an absent value when none answers.
//! Rendering turns that value into report lines.

pub mod cpu;
pub mod desktop_environment;
pub mod disk;
pub mod distro;
pub mod gpu;
pub mod hostname;
pub mod kernel;
pub mod lan_ip;
pub mod load_average;
pub mod model;
pub mod packages;
pub mod processes;
pub mod ram;
pub mod registry;
pub mod shell;
pub mod temperature;
pub mod terminal;
pub mod uptime;
pub mod user;
pub mod wan_ip;
pub mod window_manager;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::context::Context;
use crate::error::Result;
use crate::ui::lines::LineSink;

pub use registry::{resolve_descriptors, EntryKind, EntryRequest};

/// Free-form options attached to an entry descriptor
pub type Options = Map<String, Value>;

/// A probe whose value has been gathered
pub trait Entry: Send + Sync {
    /// Label used in the report and as the JSON key
    fn name(&self) -> &str;

    /// The gathered value, `null` when nothing was detected
    fn value(&self) -> Value;

    /// Append this entry's report lines
    fn render(&self, sink: &mut LineSink) {
        let value = self.value();
        let text = if is_truthy(&value) {
            value_to_text(&value)
        } else {
            sink.default_strings().not_detected.clone()
        };
        sink.append(self.name(), text);
    }
}

/// Whether a value counts as detected (non-null, non-zero, non-empty)
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Plain text form of a scalar value; compound values fall back to JSON
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Deserialize an entry's typed options, falling back to defaults
pub fn parse_options<T>(entry_name: &str, options: &Options) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(Value::Object(options.clone())).unwrap_or_else(|e| {
        warn!(
            "Invalid options for `{}` entry ({}), defaults will be used.",
            entry_name, e
        );
        T::default()
    })
}

/// An option that may be switched off with `false`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Flag(bool),
    Value(T),
}

impl<T> Toggle<T> {
    /// `false` disables, `true` keeps `default`, anything else is used as-is
    pub fn resolve(self, default: T) -> Option<T> {
        match self {
            Toggle::Flag(false) => None,
            Toggle::Flag(true) => Some(default),
            Toggle::Value(value) => Some(value),
        }
    }
}

/// Signature shared by every entry constructor in the registry
pub type Constructor = fn(String, &Options, &Context) -> Result<Box<dyn Entry>>;

/// Collapse whitespace runs into single spaces
pub(crate) fn squeeze_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Append either one comma-joined line or one line per item
pub(crate) fn append_items(sink: &mut LineSink, name: &str, items: &[String], one_line: bool) {
    if one_line {
        sink.append(name, items.join(", "));
    } else {
        for item in items {
            sink.append(name, item.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(3)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([1])));
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!("zsh")), "zsh");
        assert_eq!(value_to_text(&json!(1234)), "1234");
    }

    #[test]
    fn test_toggle() {
        let disabled: Toggle<usize> = serde_json::from_value(json!(false)).unwrap();
        let limit: Toggle<usize> = serde_json::from_value(json!(3)).unwrap();
        let enabled: Toggle<usize> = serde_json::from_value(json!(true)).unwrap();

        assert_eq!(disabled.resolve(2), None);
        assert_eq!(limit.resolve(2), Some(3));
        assert_eq!(enabled.resolve(2), Some(2));
    }

    #[test]
    fn test_squeeze_whitespace() {
        assert_eq!(
            squeeze_whitespace("Intel(R)  Core(TM)   i7 CPU"),
            "Intel(R) Core(TM) i7 CPU"
        );
    }
}
