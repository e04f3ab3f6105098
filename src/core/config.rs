use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::entries::EntryKind;
use crate::error::{GlanceError, Result};
use crate::utils::update_recursive;

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "sysglance";

/// Placeholder strings shown in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultStrings {
    pub latest: String,
    pub available: String,
    pub no_address: String,
    pub not_detected: String,
    pub virtual_environment: String,
}

impl Default for DefaultStrings {
    fn default() -> Self {
        Self {
            latest: "latest".to_string(),
            available: "available".to_string(),
            no_address: "No Address".to_string(),
            not_detected: "Not detected".to_string(),
            virtual_environment: "Virtual Environment".to_string(),
        }
    }
}

/// Typed view over the merged configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub allow_overriding: bool,
    pub parallel_loading: bool,
    pub suppress_warnings: bool,
    /// Use the distribution's `ANSI_COLOR` for every logo colour slot
    pub honor_ansi_color: bool,
    pub default_strings: DefaultStrings,
    /// Ordered entry descriptors (`{"type": ..., ...options}`)
    pub entries: Vec<Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_overriding: false,
            parallel_loading: true,
            suppress_warnings: false,
            honor_ansi_color: true,
            default_strings: DefaultStrings::default(),
            entries: default_entries(),
        }
    }
}

fn default_entries() -> Vec<Value> {
    EntryKind::ALL
        .iter()
        .map(|kind| json!({ "type": kind.name() }))
        .collect()
}

/// Configuration merged from the defaults and the JSON files found on disk
#[derive(Debug, Clone)]
pub struct Configuration {
    document: Value,
    loaded_files: Vec<PathBuf>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            document: Self::default_document(),
            loaded_files: Vec::new(),
        }
    }
}

impl Configuration {
    pub fn default_document() -> Value {
        serde_json::to_value(Settings::default()).unwrap_or_else(|_| json!({}))
    }

    /// Load the configuration.
    ///
    /// With an explicit path only that file (or `PATH/config.json`) is read.
    /// Otherwise the system, user and working-directory files are tried in
    /// that order; once one has been applied, the next ones are only merged
    /// if `allow_overriding` is set.
    pub fn load(config_path: Option<&Path>) -> Self {
        let mut configuration = Self::default();

        match config_path {
            Some(path) => configuration.load_file(path),
            None => {
                for path in Self::search_paths() {
                    configuration.load_file(&path);
                }
            }
        }

        configuration
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc").join(APP_DIR_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_DIR_NAME));
        }
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd);
        }
        paths
    }

    /// Merge one configuration file, if present and valid.
    pub fn load_file(&mut self, path: &Path) {
        if let Err(e) = self.try_load_file(path) {
            error!("{}", e);
        }
    }

    /// Merge one configuration file.
    ///
    /// Returns `Ok(false)` when the file is missing or overriding is not
    /// allowed, and a config error when it cannot be read or is invalid.
    pub fn try_load_file(&mut self, path: &Path) -> Result<bool> {
        if !self.loaded_files.is_empty() && !self.settings().allow_overriding {
            return Ok(false);
        }

        let path = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(invalid_file(&path, e)),
        };

        let overrides: Value =
            serde_json::from_slice(&data).map_err(|e| invalid_file(&path, e))?;

        if !overrides.is_object() {
            return Err(invalid_file(&path, "root must be a JSON object"));
        }

        let mut merged = self.document.clone();
        update_recursive(&mut merged, overrides);

        serde_json::from_value::<Settings>(merged.clone()).map_err(|e| invalid_file(&path, e))?;

        self.document = merged;
        self.loaded_files.push(path);
        Ok(true)
    }

    /// Files merged so far, in load order
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    pub fn settings(&self) -> Settings {
        // Every merged document was validated against `Settings` in `load_file`.
        serde_json::from_value(self.document.clone()).unwrap_or_default()
    }
}

fn invalid_file(path: &Path, reason: impl std::fmt::Display) -> GlanceError {
    GlanceError::config(format!("{} ({})", reason, path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Configuration::default().settings();
        assert!(!settings.allow_overriding);
        assert!(settings.parallel_loading);
        assert!(!settings.suppress_warnings);
        assert_eq!(settings.default_strings.not_detected, "Not detected");
        assert_eq!(settings.entries.len(), EntryKind::ALL.len());
        assert_eq!(settings.entries[0], json!({"type": "User"}));
    }

    #[test]
    fn test_default_document_keys() {
        let document = Configuration::default_document();
        for key in [
            "allow_overriding",
            "parallel_loading",
            "suppress_warnings",
            "default_strings",
            "entries",
        ] {
            assert!(document.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_invalid_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"suppress_warnings": "sometimes"}"#).unwrap();

        let mut configuration = Configuration::default();
        let err = configuration.try_load_file(&path).unwrap_err();

        assert!(matches!(err, GlanceError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: "));
        assert!(err.to_string().contains("config.json"));
        assert!(configuration.loaded_files().is_empty());
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut configuration = Configuration::default();

        assert!(!configuration.try_load_file(dir.path()).unwrap());
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();
        assert!(configuration.try_load_file(dir.path()).unwrap());
    }
}
