//! Optional user configuration
//!
//! Read once at startup from `{config_dir}/starship-viewer/config.json`.
//! A missing file means defaults; an unreadable or malformed file is an
//! error surfaced before the terminal enters raw mode.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use starship_viewer_api::SWAPI_BASE;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Theme selection, stored lowercase in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    /// Index understood by `view::theme::set_theme_index`.
    pub fn index(self) -> u8 {
        match self {
            ThemeChoice::Dark => 0,
            ThemeChoice::Light => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API base URL; defaults to the production SWAPI base.
    pub api_base: String,
    pub theme: ThemeChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: SWAPI_BASE.to_string(),
            theme: ThemeChoice::default(),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("starship-viewer").join("config.json"))
}

/// Loads the configuration, falling back to defaults when no file exists.
pub fn load() -> Result<Config, ConfigError> {
    let Some(path) = config_path() else {
        log::warn!("No config directory on this platform, using defaults");
        return Ok(Config::default());
    };

    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: Config = serde_json::from_str(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_production_base() {
        let config = Config::default();
        assert_eq!(config.api_base, SWAPI_BASE);
        assert_eq!(config.theme, ThemeChoice::Dark);
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{"api_base": "http://localhost:8080/api", "theme": "light"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_base, "http://localhost:8080/api");
        assert_eq!(config.theme, ThemeChoice::Light);
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme": "light"}"#).unwrap();
        assert_eq!(config.api_base, SWAPI_BASE);
        assert_eq!(config.theme, ThemeChoice::Light);
    }

    #[test]
    fn theme_indices() {
        assert_eq!(ThemeChoice::Dark.index(), 0);
        assert_eq!(ThemeChoice::Light.index(), 1);
    }
}
