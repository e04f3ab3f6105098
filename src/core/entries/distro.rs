//! Distribution name and machine architecture.

use serde_json::{json, Value};
use std::env::consts;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::ui::lines::LineSink;

pub struct Distro {
    name: String,
    distro_name: Option<String>,
    arch: String,
}

impl Distro {
    pub fn new(name: String, _options: &Options, ctx: &Context) -> Self {
        Self {
            name,
            distro_name: ctx.os_release.name().map(str::to_string),
            arch: consts::ARCH.to_string(),
        }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

impl Entry for Distro {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        json!({
            "name": self.distro_name,
            "arch": self.arch,
        })
    }

    fn render(&self, sink: &mut LineSink) {
        let distro_name = self
            .distro_name
            .clone()
            .unwrap_or_else(|| sink.default_strings().not_detected.clone());
        sink.append(&self.name, format!("{} {}", distro_name, self.arch));
    }
}
