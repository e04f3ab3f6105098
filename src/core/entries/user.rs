//! Current user's login name.

use serde_json::Value;
use std::env;

use super::{Entry, Options};
use crate::core::context::Context;
use crate::error::Result;
use crate::platform::users;

const LOGIN_VARIABLES: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

pub struct User {
    name: String,
    value: Option<String>,
}

impl User {
    pub fn new(name: String, _options: &Options, _ctx: &Context) -> Self {
        let value = login_from_lookup(|key| env::var(key).ok()).or_else(users::login_name);
        Self { name, value }
    }

    pub fn boxed(name: String, options: &Options, ctx: &Context) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::new(name, options, ctx)))
    }
}

/// First non-empty login variable
fn login_from_lookup<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOGIN_VARIABLES
        .iter()
        .filter_map(|key| lookup(key))
        .find(|login| !login.is_empty())
}

impl Entry for User {
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

    #[test]
    fn test_variable_precedence() {
        let login = login_from_lookup(|key| match key {
            "USER" => Some("alice".to_string()),
            "USERNAME" => Some("bob".to_string()),
            _ => None,
        });
        assert_eq!(login.as_deref(), Some("alice"));
    }

    #[test]
    fn test_empty_variables_are_skipped() {
        let login = login_from_lookup(|key| match key {
            "LOGNAME" => Some(String::new()),
            "LNAME" => Some("carol".to_string()),
            _ => None,
        });
        assert_eq!(login.as_deref(), Some("carol"));
        assert_eq!(login_from_lookup(|_| None), None);
    }
}
