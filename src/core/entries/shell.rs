//! User's login shell.

use serde_json::Value;
use std::env;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::users;

pub struct Shell {
    name: String,
    value: Option<String>,
}

impl Shell {
    pub fn new(name: String, _options: &Options, _ctx: &Context) -> Self {
        let value = env::var("SHELL")
            .ok()
            .filter(|shell| !shell.is_empty())
            .or_else(users::login_shell);
        Self { name, value }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

impl Entry for Shell {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        self.value.clone().map(Value::String).unwrap_or(Value::Null)
    }
}
