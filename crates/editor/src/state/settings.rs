//! Editor settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::EnvironmentPreset;

use super::camera::DEFAULT_FOV_DEGREES;
use super::history::DEFAULT_HISTORY_LIMIT;

fn default_history_limit() -> Option<usize> {
    Some(DEFAULT_HISTORY_LIMIT)
}

fn default_true() -> bool {
    true
}

fn default_fov() -> f32 {
    DEFAULT_FOV_DEGREES
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Maximum snapshots kept for undo (`null` = unbounded)
    #[serde(default = "default_history_limit")]
    pub history_limit: Option<usize>,
    /// Environment preset of a new session
    #[serde(default)]
    pub environment: EnvironmentPreset,
    /// Seed new sessions with the starter objects
    #[serde(default = "default_true")]
    pub seed_starter_scene: bool,
    /// Vertical field of view of the default camera, in degrees
    #[serde(default = "default_fov")]
    pub camera_fov: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            environment: EnvironmentPreset::default(),
            seed_starter_scene: true,
            camera_fov: DEFAULT_FOV_DEGREES,
        }
    }
}

impl EditorSettings {
    /// Location of the settings file in the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "scene-editor", "scene-editor")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config directory, or return default if not found
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring malformed settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if let Err(e) = std::fs::write(path, json) {
                tracing::warn!("Failed to save settings to {}: {e}", path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("scene-editor-settings-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = EditorSettings::load_from(&temp_path("missing.json"));
        assert_eq!(settings, EditorSettings::default());
        assert_eq!(settings.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("settings.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"environment": "night", "history_limit": null}"#).unwrap();

        let settings = EditorSettings::load_from(&path);
        assert_eq!(settings.environment, EnvironmentPreset::Night);
        assert_eq!(settings.history_limit, None);
        assert!(settings.seed_starter_scene);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("settings.json");
        let settings = EditorSettings {
            history_limit: Some(5),
            environment: EnvironmentPreset::Studio,
            seed_starter_scene: false,
            camera_fov: 50.0,
        };
        settings.save_to(&path);
        assert_eq!(EditorSettings::load_from(&path), settings);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = temp_path("settings.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(EditorSettings::load_from(&path), EditorSettings::default());
    }
}
