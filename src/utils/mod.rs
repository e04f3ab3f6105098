// Small helpers shared across modules

pub mod merge;
pub mod semver;

pub use merge::update_recursive;
pub use semver::version_to_semver_segments;
