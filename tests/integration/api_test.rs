use serde_json::{json, Value};
use std::sync::Arc;
use sysglance::core::api::json_serialization;
use sysglance::core::context::Context;
use sysglance::core::distributions::Distributions;
use sysglance::core::entries::resolve_descriptors;
use sysglance::core::loader::load_entries;
use sysglance::core::processes::Processes;

#[test]
fn test_json_round_trip_counts_entries() {
    let ctx = Arc::new(Context {
        processes: Processes::from_names(["init", "bash"]),
        ..Context::default()
    });
    let requests = resolve_descriptors(&[
        json!({"type": "Processes"}),
        json!({"type": "Distro"}),
        json!({"type": "Hostname"}),
    ]);
    let entries = load_entries(requests, ctx, true).unwrap();

    for indent in 0..3 {
        let document: Value =
            serde_json::from_str(&json_serialization(&entries, Distributions::Alpine, indent).unwrap())
                .unwrap();

        assert_eq!(document["meta"]["count"], 3);
        assert_eq!(document["meta"]["distro"], "alpine");
        assert_eq!(document["data"].as_object().unwrap().len(), 3);
        assert_eq!(document["data"]["Processes"], 2);
        assert_eq!(
            document["meta"]["version"],
            json!(env!("CARGO_PKG_VERSION")
                .split('.')
                .map(|segment| segment.parse::<u64>().unwrap())
                .collect::<Vec<_>>())
        );
    }
}
