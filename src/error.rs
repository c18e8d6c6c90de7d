use std::time::Duration;
use thiserror::Error;

/// Unified error type for git-tags operations
#[derive(Error, Debug)]
pub enum GitTagsError {
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Failed to run git: {0}")]
    ToolInvocation(String),

    #[error("Invalid semantic version: {0}")]
    Parse(String),

    #[error("git did not finish within {limit:?}")]
    Timeout { limit: Duration },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tags
pub type Result<T> = std::result::Result<T, GitTagsError>;

impl GitTagsError {
    /// Create a not-a-repository error with context
    pub fn not_a_repository(msg: impl Into<String>) -> Self {
        GitTagsError::NotARepository(msg.into())
    }

    /// Create a tool invocation error with context
    pub fn tool(msg: impl Into<String>) -> Self {
        GitTagsError::ToolInvocation(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        GitTagsError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitTagsError::Config(msg.into())
    }
}
