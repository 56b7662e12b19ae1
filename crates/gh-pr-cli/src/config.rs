//! Application configuration
//!
//! Configuration loaded from a gh-pr.toml file, merged with the
//! environment at the process boundary. Nothing below the command layer
//! reads the environment directly.

use gh_diff_render::ColorMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE: &str = "gh-pr.toml";

/// Application configuration loaded from gh-pr.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Pager program for long diffs (e.g., "less -R"); the PAGER
    /// environment variable takes precedence
    #[serde(default)]
    pub pager: Option<String>,

    /// Default color mode when --color is not given: always, never, auto
    #[serde(default)]
    pub color: Option<String>,
}

impl AppConfig {
    /// Load config from CWD first, then the user config directory, or
    /// use defaults.
    pub fn load() -> Self {
        let Some(content) = load_config_file() else {
            return Self::default();
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    /// The effective pager: `PAGER` from the environment, falling back
    /// to the config file value.
    pub fn effective_pager(&self, env_pager: Option<String>) -> Option<String> {
        env_pager.or_else(|| self.pager.clone())
    }

    /// The effective color mode when the flag is absent.
    pub fn effective_color(&self, flag: Option<ColorMode>) -> anyhow::Result<ColorMode> {
        if let Some(mode) = flag {
            return Ok(mode);
        }
        match &self.color {
            Some(value) => Ok(value.parse()?),
            None => Ok(ColorMode::default()),
        }
    }
}

/// Load config file content from CWD first, then the user config dir
///
/// Searches for gh-pr.toml in:
/// 1. Current working directory
/// 2. `{config_dir}/gh-pr/gh-pr.toml`
///
/// Returns the file content if found, None otherwise.
fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(path) = user_config_path() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Path of the config file in the user config directory.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gh-pr").join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.pager.is_none());
        assert!(config.color.is_none());
    }

    #[test]
    fn test_parses_fields() {
        let config: AppConfig = toml::from_str(
            r#"
pager = "less -R"
color = "never"
"#,
        )
        .unwrap();
        assert_eq!(config.pager.as_deref(), Some("less -R"));
        assert_eq!(config.color.as_deref(), Some("never"));
    }

    #[test]
    fn test_env_pager_overrides_config() {
        let config = AppConfig {
            pager: Some("more".to_string()),
            color: None,
        };

        assert_eq!(
            config.effective_pager(Some("less -R".to_string())).as_deref(),
            Some("less -R")
        );
        assert_eq!(config.effective_pager(None).as_deref(), Some("more"));
    }

    #[test]
    fn test_effective_color_precedence() {
        let config = AppConfig {
            pager: None,
            color: Some("never".to_string()),
        };

        // Flag beats config; config beats the default
        assert_eq!(
            config.effective_color(Some(ColorMode::Always)).unwrap(),
            ColorMode::Always
        );
        assert_eq!(config.effective_color(None).unwrap(), ColorMode::Never);
        assert_eq!(
            AppConfig::default().effective_color(None).unwrap(),
            ColorMode::Auto
        );
    }

    #[test]
    fn test_effective_color_rejects_bad_config_value() {
        let config = AppConfig {
            pager: None,
            color: Some("rainbow".to_string()),
        };
        let err = config.effective_color(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "did not understand color: \"rainbow\". Expected one of always, never, or auto"
        );
    }
}
