use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::sync::Mutex;
use sysglance::core::entries::{resolve_descriptors, EntryKind};

/// Keeps every warning logged by the registry
struct WarningCapture {
    messages: Mutex<Vec<String>>,
}

impl Log for WarningCapture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) && record.target().ends_with("entries::registry") {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: WarningCapture = WarningCapture {
    messages: Mutex::new(Vec::new()),
};

fn captured_warnings() -> Vec<String> {
    // Installed once per test binary, later calls fail harmlessly.
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Warn);
    CAPTURE.messages.lock().unwrap().clone()
}

#[test]
fn test_default_entries_resolve_in_order() {
    let settings = sysglance::core::config::Settings::default();
    let requests = resolve_descriptors(&settings.entries);

    let kinds: Vec<EntryKind> = requests.iter().map(|request| request.kind).collect();
    assert_eq!(kinds, EntryKind::ALL.to_vec());
}

#[test]
fn test_invalid_type_does_not_stop_others() {
    let descriptors = vec![
        json!({"type": "Hostname"}),
        json!({"type": "Teapot"}),
        json!({"name": "untyped"}),
        json!({"type": "WAN_IP", "name": "Public IP", "one_line": false}),
    ];

    let requests = resolve_descriptors(&descriptors);

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].kind, EntryKind::Hostname);
    assert_eq!(requests[0].display_name(), "Hostname");
    assert_eq!(requests[1].kind, EntryKind::WanIp);
    assert_eq!(requests[1].display_name(), "Public IP");
    assert_eq!(requests[1].options.get("one_line"), Some(&json!(false)));
}

#[test]
fn test_invalid_type_is_reported() {
    captured_warnings();

    let requests = resolve_descriptors(&[json!({"type": "Flux Capacitor"}), json!({"type": "CPU"})]);

    assert_eq!(requests.len(), 1);
    let warnings = captured_warnings();
    assert!(
        warnings
            .iter()
            .any(|message| message.contains("invalid `type`") && message.contains("Flux Capacitor")),
        "{:?}",
        warnings
    );
}

#[test]
fn test_disabled_entries_are_skipped() {
    let descriptors = vec![
        json!({"type": "Temperature", "disabled": true}),
        json!({"type": "Terminal"}),
    ];

    let requests = resolve_descriptors(&descriptors);

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].kind, EntryKind::Terminal);
}
