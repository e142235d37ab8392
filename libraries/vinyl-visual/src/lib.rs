//! Vinyl Player - Visualization Pipeline
//!
//! This crate provides:
//! - Album-art color extraction (strided average over the RGBA raster)
//! - Waveform rendering (one polyline per animation frame)
//! - Frame scheduling abstraction (fixed-rate loop for native hosts)
//!
//! Drawing and sampling go through `vinyl_core` capability traits, so a frame
//! can be rendered against any `RenderSurface` and any `AudioTap`.
//!
//! # Example
//!
//! ```rust
//! use vinyl_core::{PresentationColor, RgbaRaster, Rgb};
//! use vinyl_visual::ColorExtractor;
//!
//! let color = PresentationColor::default();
//! let extractor = ColorExtractor::default();
//!
//! let cover = RgbaRaster::solid(64, 64, 30, 60, 90);
//! extractor.publish(&cover, &color).unwrap();
//! assert_eq!(color.get(), Rgb::new(30, 60, 90));
//! ```

mod color;
mod config;
mod scheduler;
mod waveform;

pub use color::{average_color, ColorExtractor};
pub use config::VisualizerConfig;
pub use scheduler::{FixedRateScheduler, FrameScheduler};
pub use waveform::{SampleBuffer, WaveformRenderer, SILENCE};
