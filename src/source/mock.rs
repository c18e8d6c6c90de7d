use crate::error::{GitTagsError, Result};
use crate::source::TagSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock source for testing without running git
///
/// Unknown paths fail with [GitTagsError::NotARepository], like `git` outside a work tree.
pub struct MockSource {
    repos: HashMap<PathBuf, Vec<String>>,
}

impl MockSource {
    /// Create a new mock with no repositories
    pub fn new() -> Self {
        MockSource {
            repos: HashMap::new(),
        }
    }

    /// Register a repository at `path` reporting `tags` in the given order
    pub fn add_repo<I, S>(&mut self, path: impl Into<PathBuf>, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repos
            .insert(path.into(), tags.into_iter().map(Into::into).collect());
    }

    /// Builder form of [MockSource::add_repo]
    pub fn with_repo<I, S>(mut self, path: impl Into<PathBuf>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_repo(path, tags);
        self
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagSource for MockSource {
    async fn fetch_raw_tags(&self, repo: &Path) -> Result<Vec<String>> {
        self.repos.get(repo).cloned().ok_or_else(|| {
            GitTagsError::not_a_repository(format!(
                "fatal: not a git repository: {}",
                repo.display()
            ))
        })
    }
}
