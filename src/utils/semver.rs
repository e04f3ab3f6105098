/// Split a release string into its numeric segments.
///
/// Anything after the first `-` is ignored (`"6.5.0-14-generic"` gives
/// `[6, 5, 0]`). Returns `None` if a remaining segment is not a number.
pub fn version_to_semver_segments(version: &str) -> Option<Vec<u64>> {
    let core = version.split('-').next().unwrap_or_default();

    core.split('.')
        .map(|segment| segment.parse::<u64>().ok())
        .collect()
}
