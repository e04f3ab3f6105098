// Command handlers module
pub mod report;
pub mod version;

// Re-exports for cleaner imports
pub use report::{execute as report, ReportOptions};
pub use version::execute as version;
