//! Configuration handling for the TUI

use crate::state::View;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding `config.json` and `preferences.json`
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "portal", "portal-tui").map(|dirs| dirs.config_dir().to_path_buf())
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Page shown at startup: "login" or "register"
    pub start_view: Option<String>,
    /// Overrides the detected OS color scheme: "dark" or "light"
    pub prefers_color_scheme: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load configuration from the user's config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The page to open first. Unknown values fall back to the login page.
    pub fn start_view(&self) -> View {
        match self.start_view.as_deref() {
            Some("register") => View::Register,
            Some("login") | None => View::Login,
            Some(other) => {
                tracing::warn!("Unknown start_view {other:?}, opening login");
                View::Login
            }
        }
    }

    /// Explicit color scheme choice, if one is configured
    pub fn color_scheme_override(&self) -> Option<bool> {
        match self.prefers_color_scheme.as_deref() {
            Some("dark") => Some(true),
            Some("light") => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.start_view.is_none());
        assert!(config.prefers_color_scheme.is_none());
        assert_eq!(config.start_view(), View::Login);
        assert_eq!(config.color_scheme_override(), None);
    }

    #[test]
    fn test_start_view_register() {
        let config = TuiConfig {
            start_view: Some("register".to_string()),
            ..Default::default()
        };
        assert_eq!(config.start_view(), View::Register);
    }

    #[test]
    fn test_unknown_start_view_falls_back_to_login() {
        let config = TuiConfig {
            start_view: Some("main".to_string()),
            ..Default::default()
        };
        assert_eq!(config.start_view(), View::Login);
    }

    #[test]
    fn test_color_scheme_override() {
        let dark = TuiConfig {
            prefers_color_scheme: Some("dark".to_string()),
            ..Default::default()
        };
        let light = TuiConfig {
            prefers_color_scheme: Some("light".to_string()),
            ..Default::default()
        };
        let bogus = TuiConfig {
            prefers_color_scheme: Some("sepia".to_string()),
            ..Default::default()
        };
        assert_eq!(dark.color_scheme_override(), Some(true));
        assert_eq!(light.color_scheme_override(), Some(false));
        assert_eq!(bogus.color_scheme_override(), None);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.start_view.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"start_view": "register", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.start_view, Some("register".to_string()));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.start_view.is_none());
        assert!(config.prefers_color_scheme.is_none());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let json = r#"{"start_view": "register", "prefers_color_scheme": "dark"}"#;
        fs::write(&path, json).unwrap();

        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config.start_view(), View::Register);
        assert_eq!(config.color_scheme_override(), Some(true));
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(TuiConfig::load_from(&path).is_err());
    }
}
