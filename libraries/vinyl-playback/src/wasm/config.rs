//! Widget configuration for the browser bridge

use crate::PlaybackConfig;
use serde::{Deserialize, Serialize};
use vinyl_core::{Result, VinylError};
use vinyl_visual::VisualizerConfig;

/// Everything `WasmPlayer` needs to find its elements and set itself up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    pub playback: PlaybackConfig,
    pub visualizer: VisualizerConfig,

    /// `<audio>` element id (default: "audio")
    pub audio_id: String,

    /// Waveform `<canvas>` id (default: "visualizer")
    pub canvas_id: String,

    /// Album cover `<img>` id (default: "albumCover")
    pub cover_id: String,

    /// CSS custom property on the root element that receives the album-art
    /// color (default: "--gold"); empty disables it
    pub color_property: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            visualizer: VisualizerConfig::default(),
            audio_id: "audio".to_string(),
            canvas_id: "visualizer".to_string(),
            cover_id: "albumCover".to_string(),
            color_property: "--gold".to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.playback.validate()?;
        self.visualizer.validate()?;

        for (name, id) in [
            ("audioId", &self.audio_id),
            ("canvasId", &self.canvas_id),
            ("coverId", &self.cover_id),
        ] {
            if id.is_empty() {
                return Err(VinylError::invalid_config(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }
}
