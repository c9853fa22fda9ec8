//! Viewer settings loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Show the welcome card on start.
    pub show_welcome: bool,
    /// Input poll interval in milliseconds.
    pub tick_ms: u64,
    /// Log file; defaults to the user cache directory.
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `"info,cloudpath_core=debug"`.
    pub log_filter: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            show_welcome: true,
            tick_ms: 50,
            log_file: None,
            log_filter: "info".into(),
        }
    }
}

impl TuiConfig {
    /// Parse settings from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from an explicit path, or the default location if it exists.
    /// Only a missing default file yields defaults; an explicit path must
    /// exist, and a malformed file is always an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("cloudpath")
                .join("cloudpath.log")
        })
    }
}

/// `<config dir>/cloudpath/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cloudpath").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = TuiConfig::from_toml("tick_ms = 100\n").unwrap();
        assert_eq!(config.tick_ms, 100);
        assert!(config.show_welcome);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "show_welcome = false\nlog_file = \"/tmp/cp.log\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();

        let config = TuiConfig::load(Some(&path)).unwrap();
        assert!(!config.show_welcome);
        assert_eq!(config.log_path(), PathBuf::from("/tmp/cp.log"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = TuiConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("read config"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_ms = \"fast\"").unwrap();

        let err = TuiConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn zero_tick_is_clamped() {
        let config = TuiConfig { tick_ms: 0, ..TuiConfig::default() };
        assert_eq!(config.tick(), Duration::from_millis(1));
    }
}
