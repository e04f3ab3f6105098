use serde_json::json;
use std::sync::Arc;
use sysglance::core::context::Context;
use sysglance::core::distributions::OsRelease;
use sysglance::core::entries::{resolve_descriptors, Entry, EntryRequest};
use sysglance::core::loader::load_entries;
use sysglance::core::processes::Processes;

fn context() -> Arc<Context> {
    Arc::new(Context {
        processes: Processes::from_names(["init", "sshd", "bash", "i3"]),
        os_release: OsRelease::parse("PRETTY_NAME=\"Test Linux\"\nID=arch\n"),
        ..Context::default()
    })
}

fn requests() -> Vec<EntryRequest> {
    resolve_descriptors(&[
        json!({"type": "Processes"}),
        json!({"type": "Distro", "name": "OS"}),
        json!({"type": "User"}),
        json!({"type": "Shell"}),
        json!({"type": "DesktopEnvironment"}),
        json!({"type": "Processes", "name": "Tasks"}),
    ])
}

fn names(entries: &[Box<dyn Entry>]) -> Vec<String> {
    entries.iter().map(|entry| entry.name().to_string()).collect()
}

#[test]
fn test_parallel_and_sequential_loading_agree() {
    let parallel = load_entries(requests(), context(), true).unwrap();
    let sequential = load_entries(requests(), context(), false).unwrap();

    assert_eq!(
        names(&parallel),
        vec!["Processes", "OS", "User", "Shell", "Desktop Environment", "Tasks"]
    );
    assert_eq!(names(&parallel), names(&sequential));

    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.value(), s.value(), "{}", p.name());
    }
}

#[test]
fn test_context_values_flow_into_entries() {
    let entries = load_entries(requests(), context(), true).unwrap();

    assert_eq!(entries[0].value(), json!(4));
    assert_eq!(entries[1].value()["name"], "Test Linux");
    assert_eq!(entries[5].value(), json!(4));
}

#[test]
fn test_empty_request_list() {
    let entries = load_entries(Vec::new(), context(), true).unwrap();
    assert!(entries.is_empty());
}
