//! JSON document describing every loaded entry.

use chrono::Local;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::core::distributions::Distributions;
use crate::core::entries::Entry;
use crate::error::{GlanceError, Result};
use crate::utils::version_to_semver_segments;

/// `{"data": {name: value}, "meta": {...}}`
pub fn json_document(entries: &[Box<dyn Entry>], distribution: Distributions) -> Value {
    let data: Map<String, Value> = entries
        .iter()
        .map(|entry| (entry.name().to_string(), entry.value()))
        .collect();

    json!({
        "data": data,
        "meta": {
            "version": version_to_semver_segments(env!("CARGO_PKG_VERSION")).unwrap_or_default(),
            "date": Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            "count": entries.len(),
            "distro": distribution.identifier(),
        },
    })
}

/// Serialize the document; `indent` 0 is compact, otherwise `2 * indent` spaces
pub fn json_serialization(
    entries: &[Box<dyn Entry>],
    distribution: Distributions,
    indent: usize,
) -> Result<String> {
    let document = json_document(entries, distribution);

    if indent == 0 {
        return Ok(serde_json::to_string(&document)?);
    }

    let indent = " ".repeat(indent * 2);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| GlanceError::render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, Value);

    impl Entry for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        fn value(&self) -> Value {
            self.1.clone()
        }
    }

    fn entries() -> Vec<Box<dyn Entry>> {
        vec![
            Box::new(Fixed("User", json!("alice"))),
            Box::new(Fixed("Processes", json!(120))),
            Box::new(Fixed("GPU", Value::Null)),
        ]
    }

    #[test]
    fn test_document_shape() {
        let document = json_document(&entries(), Distributions::Debian);

        assert_eq!(document["data"]["User"], "alice");
        assert_eq!(document["data"]["Processes"], 120);
        assert!(document["data"]["GPU"].is_null());
        assert_eq!(document["meta"]["count"], 3);
        assert_eq!(document["meta"]["distro"], "debian");
        assert!(document["meta"]["version"].is_array());
        assert!(document["meta"]["date"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_data_keeps_entry_order() {
        let document = json_document(&entries(), Distributions::Linux);
        let keys: Vec<&String> = document["data"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["User", "Processes", "GPU"]);
    }

    #[test]
    fn test_compact_and_indented() {
        let compact = json_serialization(&entries(), Distributions::Linux, 0).unwrap();
        assert!(!compact.contains('\n'));

        let indented = json_serialization(&entries(), Distributions::Linux, 1).unwrap();
        assert!(indented.contains("\n  \"data\": {\n    \"User\": \"alice\""));

        let wider = json_serialization(&entries(), Distributions::Linux, 2).unwrap();
        assert!(wider.contains("\n    \"data\""));

        let parsed: Value = serde_json::from_str(&wider).unwrap();
        assert_eq!(parsed["meta"]["count"], 3);
    }
}
