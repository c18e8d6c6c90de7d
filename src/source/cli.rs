use crate::error::{GitTagsError, Result};
use crate::source::TagSource;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Used when git exits non-zero without printing anything
const GENERIC_NOT_A_REPOSITORY: &str = "not a git repository";

/// Lists tags by running `git tag --list --no-column` in the repository directory
///
/// `--no-column` keeps one tag per line even when `column.ui` or `column.tag`
/// is set to `always`.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    timeout: Option<Duration>,
}

impl GitCli {
    /// Use the `git` found on PATH with no timeout
    pub fn new() -> Self {
        GitCli {
            program: "git".to_string(),
            timeout: None,
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Kill git and fail with [GitTagsError::Timeout] if it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagSource for GitCli {
    async fn fetch_raw_tags(&self, repo: &Path) -> Result<Vec<String>> {
        debug!(
            program = %self.program,
            repo = %repo.display(),
            "running git tag --list --no-column"
        );

        let child = Command::new(&self.program)
            .args(["tag", "--list", "--no-column"])
            .current_dir(repo)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                warn!(program = %self.program, error = %e, "failed to spawn git");
                GitTagsError::tool(format!("{}: {}", self.program, e))
            })?;

        // On timeout the child is dropped, which kills it
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    warn!(repo = %repo.display(), limit = ?limit, "git timed out");
                    GitTagsError::Timeout { limit }
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| GitTagsError::tool(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                repo = %repo.display(),
                code = output.status.code().unwrap_or(-1),
                stderr = %stderr,
                "git tag failed"
            );
            let message = if stderr.is_empty() {
                GENERIC_NOT_A_REPOSITORY.to_string()
            } else {
                stderr
            };
            return Err(GitTagsError::not_a_repository(message));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}
