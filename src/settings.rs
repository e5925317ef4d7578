//! Game settings and preferences
//!
//! Plain values handed to the simulation and the audio cues. Stored as JSON
//! when the host wants them to stick around.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_OPPONENT_SPEED, MAX_OPPONENT_SPEED};
use crate::sim::GameState;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Opponent speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OpponentPreset {
    Easy,
    #[default]
    Normal,
    Hard,
    /// Use `Settings::opponent_speed` as-is
    Custom,
}

impl OpponentPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpponentPreset::Easy => "Easy",
            OpponentPreset::Normal => "Normal",
            OpponentPreset::Hard => "Hard",
            OpponentPreset::Custom => "Custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(OpponentPreset::Easy),
            "normal" | "medium" => Some(OpponentPreset::Normal),
            "hard" => Some(OpponentPreset::Hard),
            "custom" => Some(OpponentPreset::Custom),
            _ => None,
        }
    }

    /// Per-tick opponent cap for this preset (`None` for Custom)
    pub fn opponent_speed(&self) -> Option<f32> {
        match self {
            OpponentPreset::Easy => Some(3.0),
            OpponentPreset::Normal => Some(DEFAULT_OPPONENT_SPEED),
            OpponentPreset::Hard => Some(8.0),
            OpponentPreset::Custom => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub preset: OpponentPreset,
    /// Opponent per-tick speed cap (used by the Custom preset)
    pub opponent_speed: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: OpponentPreset::Normal,
            opponent_speed: DEFAULT_OPPONENT_SPEED,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a preset (applies preset defaults)
    pub fn from_preset(preset: OpponentPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    pub fn apply_preset(&mut self, preset: OpponentPreset) {
        self.preset = preset;
        if let Some(speed) = preset.opponent_speed() {
            self.opponent_speed = speed;
        }
    }

    /// Opponent speed actually handed to the simulation
    pub fn effective_opponent_speed(&self) -> f32 {
        let speed = self.preset.opponent_speed().unwrap_or(self.opponent_speed);
        if speed.is_finite() {
            speed.clamp(0.0, MAX_OPPONENT_SPEED)
        } else {
            DEFAULT_OPPONENT_SPEED
        }
    }

    /// Push simulation-relevant values into a running game
    pub fn apply_to(&self, state: &mut GameState) {
        state.set_opponent_speed(self.effective_opponent_speed());
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
