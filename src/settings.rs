//! Game tuning and configuration
//!
//! Loaded from JSON (a file on native, LocalStorage on the web). Missing
//! fields fall back to the defaults in `consts`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::ProjectileSettings;

/// Player movement and hitbox
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Pixels per tick per held direction
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    /// Wall thickness for generated layouts
    pub wall_width: f32,
    pub projectile: ProjectileSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player: PlayerSettings::default(),
            wall_width: WALL_WIDTH,
            projectile: ProjectileSettings::default(),
        }
    }
}

/// Why a settings document was rejected
#[derive(Debug)]
pub enum SettingsError {
    Parse(serde_json::Error),
    Io(std::io::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "settings are not valid JSON: {err}"),
            Self::Io(err) => write!(f, "could not read settings: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

fn require_positive(value: f32, field: &'static str) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: "must be a positive number",
        })
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every size and speed is usable by the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        require_positive(self.player.speed, "player.speed")?;
        require_positive(self.player.width, "player.width")?;
        require_positive(self.player.height, "player.height")?;
        require_positive(self.wall_width, "wall_width")?;
        require_positive(self.projectile.width, "projectile.width")?;
        require_positive(self.projectile.height, "projectile.height")?;
        require_positive(self.projectile.speed, "projectile.speed")?;
        if self.projectile.concurrent_limit == 0 {
            return Err(SettingsError::Invalid {
                field: "projectile.concurrent_limit",
                reason: "must allow at least one projectile",
            });
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "doodle_duel_settings";

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(err) => log::warn!("Ignoring stored settings: {err}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Persist to LocalStorage so the next session starts with these
    /// settings (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), SettingsError> {
        let json = serde_json::to_string(self)?;
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .is_some_and(|storage| storage.set_item(Self::STORAGE_KEY, &json).is_ok());

        if stored {
            log::info!("Stored settings in LocalStorage");
        } else {
            log::warn!("LocalStorage unavailable, settings kept for this session only");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.player.speed, 5.0);
        assert_eq!(settings.player.width, 100.0);
        assert_eq!(settings.wall_width, 10.0);
        assert_eq!(settings.projectile.concurrent_limit, 5);
        assert_eq!(settings.projectile.cool_down_ms, 100);
        assert_eq!(settings.projectile.speed, 7.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "projectile": { "cool_down_ms": 250 } }"#).expect("valid");
        assert_eq!(settings.projectile.cool_down_ms, 250);
        assert_eq!(settings.projectile.concurrent_limit, 5);
        assert_eq!(settings.player, PlayerSettings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.player.speed = 8.0;
        let json = settings.to_json().expect("serializes");
        assert_eq!(Settings::from_json(&json).expect("parses"), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "player": { "width": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "player.width",
                ..
            }
        ));

        let err =
            Settings::from_json(r#"{ "projectile": { "concurrent_limit": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("concurrent_limit"));

        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
