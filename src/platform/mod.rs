// Operating system access: external commands, accounts, HTTP

pub mod command;
pub mod http;
pub mod users;

pub use command::{check_output, CommandOutcome};
