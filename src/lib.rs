// sysglance library - public API

// Re-export error types
pub mod error;
pub use error::{GlanceError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;
pub mod utils;

use std::io::Write;

// Re-export commonly used types
pub use core::config::Configuration;

/// Initialize logging: `LEVEL: [module] message` on stderr, warnings and up.
///
/// `RUST_LOG` still overrides the default level.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
