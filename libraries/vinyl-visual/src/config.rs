//! Visualizer configuration

use serde::{Deserialize, Serialize};
use vinyl_core::{Result, VinylError};

/// Smallest transform size accepted by the Web Audio analyser
const MIN_FFT_SIZE: u32 = 32;

/// Largest transform size accepted by the Web Audio analyser
const MAX_FFT_SIZE: u32 = 32768;

/// Configuration for the waveform and color pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Analyser transform size (power of two, default: 2048)
    ///
    /// The sample buffer holds half this many samples.
    pub fft_size: u32,

    /// Waveform stroke width in pixels (default: 2.0)
    pub line_width: f64,

    /// Drawing surface height in pixels (default: 120)
    pub surface_height: f64,

    /// Sample one pixel out of this many during color extraction (default: 10)
    pub color_pixel_stride: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            line_width: 2.0,
            surface_height: 120.0,
            color_pixel_stride: 10,
        }
    }
}

impl VisualizerConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !self.fft_size.is_power_of_two()
            || !(MIN_FFT_SIZE..=MAX_FFT_SIZE).contains(&self.fft_size)
        {
            return Err(VinylError::invalid_config(format!(
                "fft_size must be a power of two in [{MIN_FFT_SIZE}, {MAX_FFT_SIZE}], got {}",
                self.fft_size
            )));
        }

        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(VinylError::invalid_config(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }

        if !(self.surface_height.is_finite() && self.surface_height > 0.0) {
            return Err(VinylError::invalid_config(format!(
                "surface_height must be positive, got {}",
                self.surface_height
            )));
        }

        if self.color_pixel_stride == 0 {
            return Err(VinylError::invalid_config(
                "color_pixel_stride must be at least 1",
            ));
        }

        Ok(())
    }

    /// Number of samples read per frame
    pub fn sample_count(&self) -> usize {
        (self.fft_size / 2) as usize
    }
}
