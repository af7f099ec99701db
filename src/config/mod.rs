use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub mod env;

pub use env::Environment;

/// File-backed configuration, stored in `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub helper: HelperConfig,
    #[serde(default)]
    pub covers: CoversConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Explicit helper locations. Anything left out is derived from the
/// environment, see [`crate::helper::paths`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HelperConfig {
    /// Interpreter that runs the helper script.
    #[serde(default)]
    pub interpreter: Option<PathBuf>,
    /// Helper script.
    #[serde(default)]
    pub script: Option<PathBuf>,
    /// Directory the endpoint is published from; the helper lives in its
    /// sibling `python` directory.
    #[serde(default)]
    pub site_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoversConfig {
    /// Cover cache. Relative paths are taken from the site directory, or the
    /// working directory when there is none.
    #[serde(default = "default_covers_dir")]
    pub dir: PathBuf,
}

fn default_covers_dir() -> PathBuf {
    PathBuf::from("covers")
}

impl Default for CoversConfig {
    fn default() -> Self {
        Self {
            dir: default_covers_dir(),
        }
    }
}

impl AppConfig {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nowplaying-bridge")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load from `path`, or the default location. A missing file yields the
    /// defaults; a present but broken one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.covers.dir, PathBuf::from("covers"));
        assert!(config.helper.interpreter.is_none());
    }

    #[test]
    fn test_full_file() {
        let config = AppConfig::parse(
            r#"
            [server]
            bind = "0.0.0.0:9000"

            [helper]
            interpreter = "/opt/py/bin/python"
            site_dir = "/Users/me/websites/roonmatrix"

            [covers]
            dir = "/var/cache/covers"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind.port(), 9000);
        assert_eq!(
            config.helper.interpreter,
            Some(PathBuf::from("/opt/py/bin/python"))
        );
        assert!(config.helper.script.is_none());
        assert_eq!(config.covers.dir, PathBuf::from("/var/cache/covers"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(AppConfig::parse("[server]\nbind = 42").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.server.bind.port(), 8080);
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
