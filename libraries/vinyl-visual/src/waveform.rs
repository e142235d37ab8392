//! Waveform rendering
//!
//! Each frame reads the analyser's time-domain samples and draws them as one
//! polyline across the surface. Samples are unsigned bytes centred on 128,
//! so `y = (sample / 128) * (height / 2)` puts silence on the midline.

use crate::config::VisualizerConfig;
use tracing::trace;
use vinyl_core::{AudioTap, PresentationColor, RenderSurface};

/// Sample value representing silence
pub const SILENCE: u8 = 128;

/// Fixed-size buffer of unsigned time-domain samples
///
/// Length is half the analyser transform size. Refreshed every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<u8>,
}

impl SampleBuffer {
    /// Buffer for a transform of `fft_size` points, initialised to silence
    pub fn new(fft_size: u32) -> Self {
        Self::with_len((fft_size / 2) as usize)
    }

    /// Buffer of exactly `len` samples, initialised to silence
    pub fn with_len(len: usize) -> Self {
        Self {
            samples: vec![SILENCE; len],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.samples
    }

    /// Refill from the tap
    pub fn refresh(&mut self, tap: &mut dyn AudioTap) {
        tap.read_time_domain(&mut self.samples);
    }

    /// True when every sample sits on the midline
    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == SILENCE)
    }
}

/// Draws the live waveform, one frame per call
pub struct WaveformRenderer {
    samples: SampleBuffer,
    line_width: f64,
    color: PresentationColor,
}

impl WaveformRenderer {
    /// Create a renderer stroking with the shared presentation color
    pub fn new(config: &VisualizerConfig, color: PresentationColor) -> Self {
        Self {
            samples: SampleBuffer::new(config.fft_size),
            line_width: config.line_width,
            color,
        }
    }

    /// Samples read on the most recent frame
    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    /// Render one frame
    ///
    /// Reads the tap, clears the surface and strokes the trace. The path ends
    /// with a segment to the right edge at mid-height.
    pub fn render_frame(&mut self, tap: &mut dyn AudioTap, surface: &mut dyn RenderSurface) {
        self.samples.refresh(tap);

        let width = surface.width();
        let height = surface.height();

        surface.clear();
        surface.begin_path();
        surface.set_line_width(self.line_width);
        surface.set_stroke_color(self.color.get());

        let len = self.samples.len();
        if len > 0 {
            let slice_width = width / len as f64;
            let mut x = 0.0;

            for (i, &sample) in self.samples.as_slice().iter().enumerate() {
                let y = (f64::from(sample) / 128.0) * (height / 2.0);
                if i == 0 {
                    surface.move_to(x, y);
                } else {
                    surface.line_to(x, y);
                }
                x += slice_width;
            }
        }

        surface.line_to(width, height / 2.0);
        surface.stroke();

        trace!("Rendered waveform frame ({} samples)", len);
    }
}
