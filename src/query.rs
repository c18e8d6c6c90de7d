//! Query facade over a [TagSource]
//!
//! Each query resolves the repository path, lists the raw tags once and
//! builds a fresh [TagList]. Nothing is cached between calls.

use crate::config::{Backend, Config};
use crate::domain::{Tag, TagList};
use crate::error::Result;
use crate::source::{self, Git2Source, GitCli, TagSource};
use tracing::debug;

/// Semver tag queries against git repositories
pub struct GitTags {
    source: Box<dyn TagSource>,
}

impl GitTags {
    /// Query with the `git` executable on PATH
    pub fn new() -> Self {
        Self::with_source(GitCli::new())
    }

    /// Query through any tag source
    pub fn with_source(source: impl TagSource + 'static) -> Self {
        GitTags {
            source: Box::new(source),
        }
    }

    /// Build the source selected by `config`
    pub fn from_config(config: &Config) -> Self {
        match config.source.backend {
            Backend::Cli => Self::with_source(
                GitCli::new()
                    .with_program(config.source.program.clone())
                    .with_timeout(config.source.timeout()),
            ),
            Backend::Libgit2 => Self::with_source(Git2Source::new()),
        }
    }

    /// All semver tags of the repository, newest first
    ///
    /// `path` defaults to the current directory. An empty list is a success.
    pub async fn get(&self, path: Option<&str>) -> Result<TagList> {
        let repo = source::resolve_repo_path(path)?;
        source::ensure_directory(&repo)?;

        let raw = self.source.fetch_raw_tags(&repo).await?;
        debug!(repo = %repo.display(), raw = raw.len(), "fetched raw tags");

        Ok(TagList::from_raw_lines(raw))
    }

    /// Newest semver tag, or `None` when the repository has none
    pub async fn latest(&self, path: Option<&str>) -> Result<Option<Tag>> {
        Ok(self.get(path).await?.into_iter().next())
    }

    /// Oldest semver tag, or `None` when the repository has none
    pub async fn oldest(&self, path: Option<&str>) -> Result<Option<Tag>> {
        Ok(self.get(path).await?.into_iter().last())
    }
}

impl Default for GitTags {
    fn default() -> Self {
        Self::new()
    }
}
