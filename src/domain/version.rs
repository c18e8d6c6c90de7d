use crate::error::{GitTagsError, Result};
use std::cmp::Ordering;

/// Semantic-version decomposition of a tag
pub type ParsedVersion = semver::Version;

/// Parse a tag string as a semantic version (e.g., "v1.2.3-rc.1" -> 1.2.3-rc.1)
///
/// Surrounding whitespace and a single leading lowercase 'v' are ignored. The
/// remainder must be a strict `major.minor.patch[-pre][+build]` version.
pub fn parse(tag: &str) -> Result<ParsedVersion> {
    let trimmed = tag.trim();
    let clean_tag = trimmed
        .strip_prefix('v')
        .unwrap_or(trimmed);

    semver::Version::parse(clean_tag)
        .map_err(|e| GitTagsError::parse(format!("'{}': {}", tag, e)))
}

/// Format a tag as "major.minor.patch", dropping any prefix, prerelease and build metadata
pub fn mmp(tag: &str) -> Result<String> {
    let version = parse(tag)?;
    Ok(format!("{}.{}.{}", version.major, version.minor, version.patch))
}

/// Compare two versions by semver precedence
///
/// Build metadata does not take part in precedence, so versions differing
/// only in build compare equal.
pub fn compare_precedence(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}
