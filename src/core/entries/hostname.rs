//! Machine host name.

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::Result;

const HOSTNAME_FILE: &str = "/etc/hostname";

pub struct Hostname {
    name: String,
    value: Option<String>,
}

impl Hostname {
    pub fn new(name: String, _options: &Options, _ctx: &Context) -> Self {
        let value = read_hostname_file(Path::new(HOSTNAME_FILE)).or_else(sysinfo::System::host_name);
        Self { name, value }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

fn read_hostname_file(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let hostname = content.trim_end();
    (!hostname.is_empty()).then(|| hostname.to_string())
}

impl Entry for Hostname {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        self.value.clone().map(Value::String).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_hostname_file_is_trimmed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hostname");
        fs::write(&path, "workstation\n").unwrap();

        assert_eq!(read_hostname_file(&path).as_deref(), Some("workstation"));
    }

    #[test]
    fn test_missing_or_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hostname");
        assert_eq!(read_hostname_file(&path), None);

        fs::write(&path, "\n").unwrap();
        assert_eq!(read_hostname_file(&path), None);
    }
}
