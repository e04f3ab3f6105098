//! Hardware model, from DMI data, plus the virtualization technology.

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::command::{self, CommandOutcome};

const DMI_DIR: &str = "/sys/devices/virtual/dmi/id";

pub struct Model {
    name: String,
    value: Option<String>,
}

impl Model {
    pub fn new(name: String, _options: &Options, ctx: &Context) -> Self {
        let value = if cfg!(target_os = "linux") {
            compose_model(
                fetch_dmi_info(Path::new(DMI_DIR)),
                fetch_virtual_env_info(),
                &ctx.default_strings.virtual_environment,
            )
        } else {
            None
        };

        Self { name, value }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

/// `model (virtualization)` inside a guest, the bare model otherwise
fn compose_model(
    model: Option<String>,
    virtualization: Option<String>,
    virtual_environment: &str,
) -> Option<String> {
    match (model, virtualization) {
        (model, Some(virtualization)) => Some(format!(
            "{} ({})",
            model.as_deref().unwrap_or(virtual_environment),
            virtualization
        )),
        (model, None) => model,
    }
}

/// `systemd-detect-virt`, or `virt-what` where systemd is absent
fn fetch_virtual_env_info() -> Option<String> {
    match command::run("systemd-detect-virt", &[]) {
        CommandOutcome::Success { stdout, .. } => {
            let virt = stdout.trim();
            (!virt.is_empty()).then(|| virt.to_string())
        }
        CommandOutcome::Failed { .. } => None,
        CommandOutcome::Missing => {
            let output = command::check_output("virt-what", &[])?;
            let technologies: Vec<&str> = output.lines().filter(|line| !line.is_empty()).collect();
            (!technologies.is_empty()).then(|| technologies.join(", "))
        }
    }
}

fn read_dmi(dmi_dir: &Path, file: &str) -> Option<String> {
    let content = fs::read_to_string(dmi_dir.join(file)).ok()?;
    let content = content.trim();

    if content.is_empty() || content.to_lowercase().contains("to be filled") {
        return None;
    }

    Some(content.to_string())
}

fn join_present(parts: &[Option<String>]) -> Option<String> {
    let parts: Vec<&str> = parts.iter().flatten().map(String::as_str).collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// Product name with its vendor and version, else the board's
pub fn fetch_dmi_info(dmi_dir: &Path) -> Option<String> {
    let dmi = |file: &str| read_dmi(dmi_dir, file);

    if let Some(product_name) = dmi("product_name") {
        let vendor = dmi("sys_vendor").filter(|vendor| !product_name.starts_with(vendor.as_str()));
        return join_present(&[vendor, Some(product_name), dmi("product_version")]);
    }

    let board_name = dmi("board_name")?;
    join_present(&[dmi("board_vendor"), Some(board_name), dmi("board_version")])
}

impl Entry for Model {
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

    fn dmi_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        for (file, content) in files {
            fs::write(dir.path().join(file), format!("{}\n", content)).unwrap();
        }
        dir
    }

    #[test]
    fn test_product_with_vendor_and_version() {
        let dir = dmi_dir(&[
            ("sys_vendor", "LENOVO"),
            ("product_name", "20HRCTO1WW"),
            ("product_version", "ThinkPad X1 Carbon 5th"),
        ]);
        assert_eq!(
            fetch_dmi_info(dir.path()).as_deref(),
            Some("LENOVO 20HRCTO1WW ThinkPad X1 Carbon 5th")
        );
    }

    #[test]
    fn test_vendor_not_repeated() {
        let dir = dmi_dir(&[("sys_vendor", "Dell Inc."), ("product_name", "Dell Inc. XPS 13")]);
        assert_eq!(fetch_dmi_info(dir.path()).as_deref(), Some("Dell Inc. XPS 13"));
    }

    #[test]
    fn test_placeholders_fall_back_to_board() {
        let dir = dmi_dir(&[
            ("product_name", "To Be Filled By O.E.M."),
            ("board_vendor", "ASRock"),
            ("board_name", "B450M Pro4"),
            ("board_version", "To be filled by O.E.M."),
        ]);
        assert_eq!(fetch_dmi_info(dir.path()).as_deref(), Some("ASRock B450M Pro4"));
    }

    #[test]
    fn test_board_needs_a_name() {
        let dir = dmi_dir(&[("board_vendor", "ASRock"), ("board_version", "1.0")]);
        assert_eq!(fetch_dmi_info(dir.path()), None);
    }

    #[test]
    fn test_nothing_available() {
        let dir = dmi_dir(&[]);
        assert_eq!(fetch_dmi_info(dir.path()), None);
    }

    #[test]
    fn test_compose_virtualized() {
        assert_eq!(
            compose_model(None, Some("kvm".to_string()), "Virtual Environment").as_deref(),
            Some("Virtual Environment (kvm)")
        );
        assert_eq!(
            compose_model(Some("QEMU Standard PC".to_string()), Some("kvm".to_string()), "VM")
                .as_deref(),
            Some("QEMU Standard PC (kvm)")
        );
        assert_eq!(
            compose_model(Some("XPS 13".to_string()), None, "VM").as_deref(),
            Some("XPS 13")
        );
        assert_eq!(compose_model(None, None, "VM"), None);
    }
}
