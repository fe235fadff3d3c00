// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.notifications.close_delay_secs = Some(5.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.notifications.close_delay_secs, Some(5.0));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::notifications::CloseDelay;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub language: Option<String>,
}

/// Settings shared by every toast added to the configured store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub close_delay_secs: Option<f64>,
    #[serde(default)]
    pub dismiss_distance: Option<f32>,
    /// Whether category feedback cues (haptics, sounds) are played.
    #[serde(default = "default_feedback")]
    pub feedback: bool,
}

fn default_feedback() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            close_delay_secs: Some(DEFAULT_CLOSE_DELAY_SECS),
            dismiss_distance: Some(DEFAULT_DISMISS_DISTANCE),
            feedback: true,
        }
    }
}

impl NotificationsConfig {
    /// Returns the configured close delay; unusable values fall back to the default.
    #[must_use]
    pub fn close_delay(&self) -> CloseDelay {
        self.close_delay_secs
            .map(CloseDelay::from_secs_f64)
            .unwrap_or_default()
    }

    /// Returns the configured drag-dismiss distance, clamped to the supported range.
    #[must_use]
    pub fn dismiss_distance(&self) -> f32 {
        match self.dismiss_distance {
            Some(distance) if distance.is_finite() => {
                distance.clamp(MIN_DISMISS_DISTANCE, MAX_DISMISS_DISTANCE)
            }
            _ => DEFAULT_DISMISS_DISTANCE,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file, falling back to defaults when the TOML is invalid.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            notifications: NotificationsConfig {
                close_delay_secs: Some(5.0),
                dismiss_distance: Some(120.0),
                feedback: false,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert!(loaded.notifications.feedback);
        assert_eq!(loaded.notifications.close_delay(), CloseDelay::default());
    }

    #[test]
    fn load_from_path_errors_when_file_is_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("absent.toml");

        assert!(load_from_path(&missing).is_err());
    }

    #[test]
    fn default_config_uses_three_second_delay() {
        let config = Config::default();
        assert_eq!(
            config.notifications.close_delay().as_duration(),
            Duration::from_secs(3)
        );
        assert_eq!(
            config.notifications.dismiss_distance(),
            DEFAULT_DISMISS_DISTANCE
        );
    }

    #[test]
    fn out_of_range_values_are_corrected() {
        let notifications = NotificationsConfig {
            close_delay_secs: Some(0.0),
            dismiss_distance: Some(10_000.0),
            feedback: true,
        };
        assert_eq!(notifications.close_delay(), CloseDelay::default());
        assert_eq!(notifications.dismiss_distance(), MAX_DISMISS_DISTANCE);
    }

    #[test]
    fn long_close_delay_is_kept() {
        let notifications = NotificationsConfig {
            close_delay_secs: Some(120.0),
            ..NotificationsConfig::default()
        };
        assert_eq!(
            notifications.close_delay().as_duration(),
            Duration::from_secs(120)
        );
    }
}
