//! Application configuration and user preferences.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::journal::get_data_dir;

/// Unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Metric units (kg)
    #[default]
    Metric,
    /// Imperial units (lbs)
    Imperial,
}

impl Units {
    /// Convert a stored kilogram weight to this unit system for display.
    pub fn display_weight(&self, weight_kg: f64) -> (f64, &'static str) {
        match self {
            Units::Metric => (weight_kg, "kg"),
            Units::Imperial => (weight_kg * 2.20462, "lbs"),
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Metric => write!(f, "Metric"),
            Units::Imperial => write!(f, "Imperial"),
        }
    }
}

impl std::str::FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            other => Err(format!("unknown unit system: {other}")),
        }
    }
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Unit preference for displaying set weights
    pub units: Units,
    /// Theme preference
    pub theme: Theme,
}

/// Get the configuration file path inside a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Load application configuration from the default data directory.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_data_dir())
}

/// Load application configuration from an explicit data directory.
///
/// A missing file yields defaults; this is not an error on first run.
pub fn load_config_from(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = config_path(data_dir);

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration into a data directory.
pub fn save_config_to(data_dir: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path(data_dir);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.units, Units::Metric);
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            units: Units::Imperial,
            theme: Theme::Dark,
        };

        save_config_to(dir.path(), &config).unwrap();
        let loaded = load_config_from(dir.path()).unwrap();

        assert_eq!(loaded.units, Units::Imperial);
        assert_eq!(loaded.theme, Theme::Dark);
    }

    #[test]
    fn test_weight_display_conversion() {
        let (value, unit) = Units::Metric.display_weight(100.0);
        assert_eq!(value, 100.0);
        assert_eq!(unit, "kg");

        let (value, unit) = Units::Imperial.display_weight(100.0);
        assert!((value - 220.462).abs() < 0.001);
        assert_eq!(unit, "lbs");
    }
}
