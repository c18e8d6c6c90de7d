use crate::error::{GitTagsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the per-project configuration file
pub const LOCAL_CONFIG_FILE: &str = "git-tags.toml";

/// Default limit for a single git invocation
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Represents the complete configuration for git-tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

/// Which implementation lists the tags of a repository.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run the git executable
    #[default]
    Cli,
    /// Read tags in-process through libgit2
    Libgit2,
}

/// Configuration for the tag source.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default = "default_program")]
    pub program: String,

    /// Zero disables the timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_program() -> String {
    "git".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            backend: Backend::default(),
            program: default_program(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Path of the user-wide configuration file, if a config directory exists
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("git-tags").join("config.toml"))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `git-tags.toml` in current directory
/// 3. `git-tags/config.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config(local);
    }

    match user_config_path() {
        Some(path) if path.exists() => read_config(&path),
        _ => Ok(Config::default()),
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        GitTagsError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| GitTagsError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.backend, Backend::Cli);
        assert_eq!(config.source.program, "git");
        assert_eq!(config.source.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_source_table() {
        let config = parse_config("[source]\nbackend = \"libgit2\"\n").unwrap();
        assert_eq!(config.source.backend, Backend::Libgit2);
        assert_eq!(config.source.program, "git");
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(parse_config("[source]\nbackend = \"hg\"\n").is_err());
    }

    #[test]
    fn test_zero_timeout_disables_limit() {
        let source = SourceConfig {
            timeout_secs: 0,
            ..SourceConfig::default()
        };
        assert_eq!(source.timeout(), None);
        assert_eq!(
            SourceConfig::default().timeout(),
            Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        );
    }
}
