//! Configuration handling for rfcs
//!
//! Configuration is read from `config.toml` in the platform config
//! directory (e.g. `~/.config/rfcs/config.toml`). Every setting is optional.
//!
//! The cache directory is resolved once at startup, first match wins:
//!
//! 1. `--cache-dir` / `RFCS_CACHE_DIR`
//! 2. `cache_dir` from the config file
//! 3. `$XDG_CACHE_HOME/rfc`
//! 4. the platform user cache directory + `/rfc`
//! 5. `$HOME/.cache/rfc`

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subdirectory of the user cache directory holding index and documents
pub const CACHE_SUBDIR: &str = "rfc";

pub const DEFAULT_INDEX_BASE_URL: &str = "https://www.rfc-editor.org/in-notes";
pub const DEFAULT_DOCUMENT_BASE_URL: &str = "https://www.rfc-editor.org/rfc";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot determine the cache directory")]
    NoCacheDirectory,

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where remote resources are fetched from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL the index files live under
    pub index_base_url: String,

    /// Base URL the `rfc<n>.<ext>` documents live under
    pub document_base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            index_base_url: DEFAULT_INDEX_BASE_URL.to_string(),
            document_base_url: DEFAULT_DOCUMENT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Explicit cache directory
    pub cache_dir: Option<PathBuf>,

    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Remote endpoints
    pub remote: RemoteConfig,
}

impl Config {
    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file, defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Returns the path of the config file
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rfcs").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Candidate cache directories, gathered once and resolved in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheDirSources {
    /// `--cache-dir` or `RFCS_CACHE_DIR`
    pub explicit: Option<PathBuf>,
    /// `cache_dir` from the config file
    pub configured: Option<PathBuf>,
    /// `$XDG_CACHE_HOME`
    pub xdg_cache_home: Option<PathBuf>,
    /// Platform user cache directory
    pub platform_cache: Option<PathBuf>,
    /// User home directory
    pub home: Option<PathBuf>,
}

impl CacheDirSources {
    /// Gathers sources from the process environment
    pub fn from_env(explicit: Option<PathBuf>, config: &Config) -> Self {
        let base_dirs = BaseDirs::new();
        let home = base_dirs
            .as_ref()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .or_else(|| non_empty_env("HOME"))
            .or_else(|| non_empty_env("USERPROFILE"));

        Self {
            explicit,
            configured: config.cache_dir.clone(),
            xdg_cache_home: non_empty_env("XDG_CACHE_HOME"),
            platform_cache: base_dirs.map(|dirs| dirs.cache_dir().to_path_buf()),
            home,
        }
    }

    /// Returns the first usable cache directory
    pub fn resolve(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = self.explicit.as_ref().or(self.configured.as_ref()) {
            return Ok(dir.clone());
        }

        self.xdg_cache_home
            .as_ref()
            .or(self.platform_cache.as_ref())
            .map(|base| base.join(CACHE_SUBDIR))
            .or_else(|| {
                self.home
                    .as_ref()
                    .map(|home| home.join(".cache").join(CACHE_SUBDIR))
            })
            .ok_or(ConfigError::NoCacheDirectory)
    }
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sources() -> CacheDirSources {
        CacheDirSources {
            explicit: Some(PathBuf::from("/explicit")),
            configured: Some(PathBuf::from("/configured")),
            xdg_cache_home: Some(PathBuf::from("/xdg")),
            platform_cache: Some(PathBuf::from("/platform")),
            home: Some(PathBuf::from("/home/user")),
        }
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.cache_dir, None);
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.remote.index_base_url, DEFAULT_INDEX_BASE_URL);
        assert_eq!(config.remote.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn parse_config() {
        let toml = r#"
cache_dir = "/tmp/rfc-cache"
default_format = "json"

[remote]
document_base_url = "http://mirror.example/rfc"
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/rfc-cache")));
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.remote.document_base_url, "http://mirror.example/rfc");
        assert_eq!(config.remote.index_base_url, DEFAULT_INDEX_BASE_URL);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_invalid_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_format = \"yaml\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn explicit_directory_wins() {
        assert_eq!(sources().resolve().unwrap(), PathBuf::from("/explicit"));
    }

    #[test]
    fn configured_directory_is_used_verbatim() {
        let sources = CacheDirSources {
            explicit: None,
            ..sources()
        };
        assert_eq!(sources.resolve().unwrap(), PathBuf::from("/configured"));
    }

    #[test]
    fn xdg_cache_home_before_platform() {
        let sources = CacheDirSources {
            explicit: None,
            configured: None,
            ..sources()
        };
        assert_eq!(sources.resolve().unwrap(), PathBuf::from("/xdg/rfc"));
    }

    #[test]
    fn platform_before_home() {
        let sources = CacheDirSources {
            platform_cache: Some(PathBuf::from("/platform")),
            home: Some(PathBuf::from("/home/user")),
            ..Default::default()
        };
        assert_eq!(sources.resolve().unwrap(), PathBuf::from("/platform/rfc"));
    }

    #[test]
    fn home_fallback() {
        let sources = CacheDirSources {
            home: Some(PathBuf::from("/home/user")),
            ..Default::default()
        };
        assert_eq!(
            sources.resolve().unwrap(),
            PathBuf::from("/home/user/.cache/rfc")
        );
    }

    #[test]
    fn no_sources_is_an_error() {
        assert!(matches!(
            CacheDirSources::default().resolve(),
            Err(ConfigError::NoCacheDirectory)
        ));
    }
}
