use serde_json::json;
use std::fs;
use sysglance::core::config::{Configuration, Settings};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_defaults_without_files() {
    let temp_dir = TempDir::new().unwrap();
    let configuration = Configuration::load(Some(temp_dir.path().join("missing.json").as_path()));

    assert!(configuration.loaded_files().is_empty());
    assert_eq!(configuration.settings(), Settings::default());
}

#[test]
fn test_config_nested_merge() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "config.json",
        r#"{"parallel_loading": false, "default_strings": {"no_address": "N/A"}}"#,
    );

    let settings = Configuration::load(Some(path.as_path())).settings();

    assert!(!settings.parallel_loading);
    assert_eq!(settings.default_strings.no_address, "N/A");
    assert_eq!(settings.default_strings.not_detected, "Not detected");
    assert_eq!(settings.entries.len(), 20);
}

#[test]
fn test_config_directory_path() {
    let temp_dir = TempDir::new().unwrap();
    write_config(&temp_dir, "config.json", r#"{"suppress_warnings": true}"#);

    let configuration = Configuration::load(Some(temp_dir.path()));

    assert!(configuration.settings().suppress_warnings);
    assert_eq!(
        configuration.loaded_files(),
        &[temp_dir.path().join("config.json")]
    );
}

#[test]
fn test_config_entries_replace_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "config.json",
        r#"{"entries": [{"type": "RAM"}, {"type": "Disk", "combine_total": false}]}"#,
    );

    let settings = Configuration::load(Some(path.as_path())).settings();

    assert_eq!(
        settings.entries,
        vec![json!({"type": "RAM"}), json!({"type": "Disk", "combine_total": false})]
    );
}

#[test]
fn test_config_invalid_files_are_ignored() {
    let temp_dir = TempDir::new().unwrap();

    for content in ["{not json", "[1, 2]", r#"{"parallel_loading": "yes"}"#] {
        let path = write_config(&temp_dir, "config.json", content);
        let configuration = Configuration::load(Some(path.as_path()));

        assert!(configuration.loaded_files().is_empty(), "{}", content);
        assert_eq!(configuration.settings(), Settings::default());
    }
}

#[test]
fn test_config_overriding_requires_opt_in() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_config(&temp_dir, "first.json", r#"{"suppress_warnings": true}"#);
    let second = write_config(&temp_dir, "second.json", r#"{"parallel_loading": false}"#);

    let mut configuration = Configuration::default();
    configuration.load_file(&first);
    configuration.load_file(&second);

    let settings = configuration.settings();
    assert!(settings.suppress_warnings);
    assert!(settings.parallel_loading);
    assert_eq!(configuration.loaded_files().len(), 1);
}

#[test]
fn test_config_overriding_allowed() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_config(
        &temp_dir,
        "first.json",
        r#"{"allow_overriding": true, "default_strings": {"latest": "newest"}}"#,
    );
    let second = write_config(
        &temp_dir,
        "second.json",
        r#"{"default_strings": {"available": "out"}}"#,
    );

    let mut configuration = Configuration::default();
    configuration.load_file(&first);
    configuration.load_file(&second);

    let settings = configuration.settings();
    assert_eq!(settings.default_strings.latest, "newest");
    assert_eq!(settings.default_strings.available, "out");
    assert_eq!(configuration.loaded_files().len(), 2);
}
