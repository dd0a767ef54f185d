//! Game settings and configuration
//!
//! Manages user preferences for audio, display and key bindings.
//! Settings live in `settings.ron` next to the executable.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::keybindings::Keybindings;
use crate::states::MatchSystems;

/// User-configurable game settings
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Play cue sounds (toggled in game)
    pub sound_enabled: bool,
    /// Multiplier applied to every cue's volume, 0.0 to 1.0
    pub master_volume: f32,
    pub vsync: bool,
    pub keybindings: Keybindings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 1.0,
            vsync: true,
            keybindings: Keybindings::default(),
        }
    }
}

impl GameSettings {
    /// Get the path to the settings file
    pub fn settings_path() -> PathBuf {
        PathBuf::from("settings.ron")
    }

    /// Load settings from file, or return default if file doesn't exist or
    /// can't be used
    pub fn load() -> Self {
        let path = Self::settings_path();
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: GameSettings =
            ron::from_str(&contents).map_err(|source| ConfigError::Ron {
                path: path.to_path_buf(),
                source,
            })?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.keybindings.fill_missing();
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Where runtime changes to [`GameSettings`] are written
#[derive(Resource, Debug, Clone)]
pub struct SettingsFile(pub PathBuf);

/// Plugin for managing game settings
pub struct SettingsPlugin {
    pub settings: GameSettings,
    /// Usually [`GameSettings::settings_path`]
    pub path: PathBuf,
}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        // Keybindings also live on their own for easy access from input systems
        app.insert_resource(self.settings.clone())
            .insert_resource(self.settings.keybindings.clone())
            .insert_resource(SettingsFile(self.path.clone()))
            .add_systems(Update, save_settings_on_change.in_set(MatchSystems::Present));
    }
}

/// Persist settings whenever they change at runtime
fn save_settings_on_change(settings: Res<GameSettings>, file: Res<SettingsFile>) {
    if settings.is_changed() && !settings.is_added() {
        if let Err(e) = settings.save_to(&file.0) {
            error!("Failed to save settings: {}", e);
        } else {
            info!("Settings changed: sound {}", if settings.sound_enabled { "on" } else { "off" });
        }
    }
}
