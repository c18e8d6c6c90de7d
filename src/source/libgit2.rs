use crate::error::{GitTagsError, Result};
use crate::source::TagSource;
use async_trait::async_trait;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Lists tags in-process through libgit2
///
/// Like `git` itself, any directory inside a work tree is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Source;

impl Git2Source {
    pub fn new() -> Self {
        Git2Source
    }

    /// Blocking tag listing; [TagSource::fetch_raw_tags] runs this on the blocking pool
    pub fn list_tags(repo: &Path) -> Result<Vec<String>> {
        let repo = Git2Repo::discover(repo).map_err(|e| {
            warn!(repo = %repo.display(), error = %e, "repository discovery failed");
            GitTagsError::not_a_repository(e.message().to_string())
        })?;

        let tags = repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl TagSource for Git2Source {
    async fn fetch_raw_tags(&self, repo: &Path) -> Result<Vec<String>> {
        debug!(repo = %repo.display(), "listing tags with libgit2");

        let repo: PathBuf = repo.to_path_buf();
        tokio::task::spawn_blocking(move || Self::list_tags(&repo))
            .await
            .map_err(|e| GitTagsError::tool(format!("libgit2 task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_repository_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Git2Source::list_tags(dir.path()).unwrap_err();
        assert!(matches!(err, GitTagsError::NotARepository(_)));
    }

    #[test]
    fn test_lists_lightweight_tags() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
        let object = repo.find_object(oid, None).unwrap();
        repo.tag_lightweight("v1.0.0", &object, false).unwrap();
        repo.tag_lightweight("not-semver", &object, false).unwrap();

        let mut tags = Git2Source::list_tags(dir.path()).unwrap();
        tags.sort();
        assert_eq!(tags, vec!["not-semver".to_string(), "v1.0.0".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_raw_tags_empty_repository() {
        let dir = tempfile::TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();

        let tags = Git2Source::new().fetch_raw_tags(dir.path()).await.unwrap();
        assert!(tags.is_empty());
    }
}
