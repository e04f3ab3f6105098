//! Number of running processes.

use serde_json::Value;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::Result;

pub struct Processes {
    name: String,
    value: usize,
}

impl Processes {
    pub fn new(name: String, _options: &Options, ctx: &Context) -> Self {
        Self {
            name,
            value: ctx.processes.number(),
        }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

impl Entry for Processes {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        Value::from(self.value)
    }
}
