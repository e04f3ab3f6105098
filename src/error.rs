use std::io;
use thiserror::Error;

/// Custom error type for sysglance
///
/// Expected environmental failures (missing tools, unreadable files) never
/// reach this type: probes degrade to an absent value instead. Only the
/// conditions below are allowed to abort a run.
#[derive(Error, Debug)]
pub enum GlanceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A probe hit a condition it has no fallback for.
    #[error("{0}")]
    SysInfo(String),

    /// The report could not be written out.
    #[error("{0}")]
    Render(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for sysglance
pub type Result<T> = std::result::Result<T, GlanceError>;

impl GlanceError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GlanceError::Config(msg.into())
    }

    /// Create a fatal probe error
    pub fn sys_info<S: Into<String>>(msg: S) -> Self {
        GlanceError::SysInfo(msg.into())
    }

    /// Create a fatal rendering error
    pub fn render<S: Into<String>>(msg: S) -> Self {
        GlanceError::Render(msg.into())
    }

    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        GlanceError::Runtime(msg.into())
    }
}
