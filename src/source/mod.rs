//! Tag source abstraction layer
//!
//! This module provides a trait-based abstraction over reading the raw tag
//! names of a repository, allowing for multiple implementations including the
//! `git` executable, libgit2 and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [TagSource] trait. The concrete
//! implementations include:
//!
//! - [cli::GitCli]: runs `git tag --list` as a subprocess
//! - [libgit2::Git2Source]: reads tag names in-process through the `git2` crate
//! - [mock::MockSource]: canned output for testing
//!
//! Sources return tag names exactly as reported, unfiltered and unsorted.
//! Ordering is the job of [crate::domain::TagList].

pub mod cli;
pub mod libgit2;
pub mod mock;

pub use cli::GitCli;
pub use libgit2::Git2Source;
pub use mock::MockSource;

use crate::error::{GitTagsError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Common tag listing trait for abstraction
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so a single source can serve
/// concurrent queries from several tasks.
///
/// ## Error Handling
///
/// Implementations map their underlying failures to
/// [GitTagsError::NotARepository] when `repo` is not under version control and
/// to [GitTagsError::ToolInvocation] when git itself could not be run.
#[async_trait]
pub trait TagSource: Send + Sync {
    /// List raw tag names of the repository at `repo`
    ///
    /// # Arguments
    /// * `repo` - Resolved repository directory
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, one per entry, in source order
    /// * `Err` - If `repo` is not a repository or git could not be run
    async fn fetch_raw_tags(&self, repo: &Path) -> Result<Vec<String>>;
}

/// Resolve the optional repository argument to a directory path
///
/// `None`, `""`, `"."` and `"./"` all mean the current working directory.
/// Any other string is used verbatim, whitespace included.
pub fn resolve_repo_path(path: Option<&str>) -> Result<PathBuf> {
    match path {
        None | Some("") | Some(".") | Some("./") => Ok(std::env::current_dir()?),
        Some(p) => Ok(PathBuf::from(p)),
    }
}

/// Fail with [GitTagsError::NotARepository] unless `repo` is an existing directory
pub fn ensure_directory(repo: &Path) -> Result<()> {
    if repo.is_dir() {
        Ok(())
    } else {
        Err(GitTagsError::not_a_repository(format!(
            "{} is not a directory",
            repo.display()
        )))
    }
}
