//! Playback configuration

use serde::{Deserialize, Serialize};
use vinyl_core::{Result, VinylError};

/// Storage key for the last played track index
pub const DEFAULT_STORAGE_KEY: &str = "lastSongIndex";

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Key under which the last played index is persisted (default: "lastSongIndex")
    pub storage_key: String,

    /// Initial output gain in `[0, 1]` (default: 1.0)
    pub initial_volume: f64,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// Initial repeat flag (default: false)
    pub repeat: bool,

    /// Seed for the shuffle picker; `None` seeds from system entropy
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            initial_volume: 1.0,
            shuffle: false,
            repeat: false,
            shuffle_seed: None,
        }
    }
}

impl PlaybackConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(VinylError::invalid_config("storage_key must not be empty"));
        }

        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(VinylError::invalid_config(format!(
                "initial_volume must be in [0, 1], got {}",
                self.initial_volume
            )));
        }

        Ok(())
    }
}
