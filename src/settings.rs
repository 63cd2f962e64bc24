//! Manager settings (window size, last profile, data file location)
//!
//! Stored as JSON under the platform config directory. These are
//! preferences only; the profiles themselves live in the data file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerSettings {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_profile: Option<String>,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(constants::data::FILENAME)
}

fn default_window_width() -> f32 {
    900.0
}

fn default_window_height() -> f32 {
    500.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            selected_profile: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
            log_level: default_log_level(),
        }
    }
}

impl ManagerSettings {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load settings, falling back to defaults when missing or unreadable
    ///
    /// Runs before logging is set up, so problems are reported through the
    /// returned warning instead of being logged here.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> (Self, Option<String>) {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return (Self::default(), None);
            }
            Err(err) => {
                let warning = format!("Failed to read settings from {}: {err}", path.display());
                return (Self::default(), Some(warning));
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => (settings, None),
            Err(err) => {
                let warning = format!(
                    "Ignoring malformed settings file {}: {err}",
                    path.display()
                );
                (Self::default(), Some(warning))
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;

        info!(path = %path.display(), "Saved manager settings");
        Ok(())
    }

    /// Log a warning produced by `load`, once logging is available
    pub fn report(warning: Option<String>) {
        if let Some(warning) = warning {
            warn!("{warning}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let (settings, warning) = ManagerSettings::load_from(&dir.path().join("manager.json"));
        assert_eq!(settings, ManagerSettings::default());
        assert!(warning.is_none());
        assert_eq!(settings.data_path, PathBuf::from("cords-data.json"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manager.json");
        fs::write(&path, r#"{"selected_profile": "My SMP", "window_width": 1200}"#).unwrap();

        let (settings, warning) = ManagerSettings::load_from(&path);
        assert!(warning.is_none());
        assert_eq!(settings.selected_profile.as_deref(), Some("My SMP"));
        assert_eq!(settings.window_width, 1200.0);
        assert_eq!(settings.window_height, 500.0);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_malformed_file_warns_and_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manager.json");
        fs::write(&path, "{ window_width: ").unwrap();

        let (settings, warning) = ManagerSettings::load_from(&path);
        assert_eq!(settings, ManagerSettings::default());
        assert!(warning.unwrap().starts_with("Ignoring malformed settings file"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("manager.json");

        let settings = ManagerSettings {
            data_path: PathBuf::from("/srv/minecraft/cords-data.json"),
            selected_profile: Some("Creative".to_string()),
            window_width: 1024.0,
            window_height: 640.0,
            log_level: "debug".to_string(),
        };
        settings.save_to(&path).unwrap();

        let (loaded, warning) = ManagerSettings::load_from(&path);
        assert!(warning.is_none());
        assert_eq!(loaded, settings);
    }
}
