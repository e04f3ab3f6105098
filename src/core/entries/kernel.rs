//! Running kernel, and whether a newer stable release exists.

use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env::consts;

use super::{parse_options, Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::http;
use crate::ui::lines::LineSink;
use crate::utils::version_to_semver_segments;

const KERNEL_RELEASES_URL: &str = "https://www.kernel.org/releases.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KernelOptions {
    /// Seconds allowed for the kernel.org request
    pub timeout: f64,
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self { timeout: 1.0 }
    }
}

#[derive(Debug, Deserialize)]
struct KernelReleases {
    latest_stable: StableRelease,
}

#[derive(Debug, Deserialize)]
struct StableRelease {
    version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelInfo {
    pub name: String,
    pub release: String,
    pub latest: Option<String>,
    pub is_outdated: Option<bool>,
}

pub struct Kernel {
    name: String,
    value: KernelInfo,
}

impl Kernel {
    pub fn new(name: String, options: &Options, ctx: &Context) -> Self {
        let options: KernelOptions = parse_options(&name, options);

        let release = sysinfo::System::kernel_version().unwrap_or_default();
        let latest = if cfg!(target_os = "linux") && !ctx.env.do_not_track {
            fetch_latest_linux_release(&options)
        } else {
            None
        };
        let is_outdated = latest
            .as_deref()
            .and_then(|latest| is_outdated(&release, latest));

        Self {
            name,
            value: KernelInfo {
                name: kernel_name(consts::OS).to_string(),
                release,
                latest,
                is_outdated,
            },
        }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

/// System name as `uname -s` would print it
fn kernel_name(os: &str) -> &str {
    match os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        "windows" => "Windows",
        other => other,
    }
}

fn fetch_latest_linux_release(options: &KernelOptions) -> Option<String> {
    let timeout = http::timeout_from_secs(options.timeout);
    match http::fetch_json::<KernelReleases>(KERNEL_RELEASES_URL, timeout) {
        Ok(releases) => Some(releases.latest_stable.version),
        Err(e) => {
            debug!("{:#}", e);
            None
        }
    }
}

/// Whether `running` sorts before `latest`, segment by segment
pub fn is_outdated(running: &str, latest: &str) -> Option<bool> {
    let running = version_to_semver_segments(running)?;
    let latest = version_to_semver_segments(latest)?;
    Some(running < latest)
}

impl Entry for Kernel {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        json!({
            "name": self.value.name,
            "release": self.value.release,
            "latest": self.value.latest,
            "is_outdated": self.value.is_outdated,
        })
    }

    fn render(&self, sink: &mut LineSink) {
        let mut text = format!("{} {}", self.value.name, self.value.release);

        if let (Some(latest), Some(is_outdated)) = (&self.value.latest, self.value.is_outdated) {
            let strings = sink.default_strings();
            if is_outdated {
                text.push_str(&format!(" ({} {})", latest, strings.available));
            } else {
                text.push_str(&format!(" ({})", strings.latest));
            }
        }

        sink.append(&self.name, text);
    }
}
