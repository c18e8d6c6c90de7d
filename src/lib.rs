//! List the semantic-version tags of a git repository, newest first.
//!
//! ```no_run
//! # async fn example() -> git_tags::Result<()> {
//! let tags = git_tags::get(None).await?;
//! if let Some(latest) = git_tags::latest(Some("./")).await? {
//!     println!("{} ({})", latest, git_tags::mmp(latest.as_str())?);
//! }
//! # let _ = tags;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod query;
pub mod source;
pub mod ui;

pub use domain::{ParsedVersion, Tag, TagList};
pub use error::{GitTagsError, Result};
pub use query::GitTags;

/// All semver tags of the repository at `path` (default: current directory), newest first
pub async fn get(path: Option<&str>) -> Result<TagList> {
    GitTags::new().get(path).await
}

/// Newest semver tag of the repository at `path`
pub async fn latest(path: Option<&str>) -> Result<Option<Tag>> {
    GitTags::new().latest(path).await
}

/// Oldest semver tag of the repository at `path`
pub async fn oldest(path: Option<&str>) -> Result<Option<Tag>> {
    GitTags::new().oldest(path).await
}

/// Parse a tag as a semantic version
pub fn parse(tag: &str) -> Result<ParsedVersion> {
    domain::version::parse(tag)
}

/// Format a tag as "major.minor.patch"
pub fn mmp(tag: &str) -> Result<String> {
    domain::version::mmp(tag)
}
