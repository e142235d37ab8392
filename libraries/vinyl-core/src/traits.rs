//! Capability traits for everything the host environment owns
//!
//! In the browser these are backed by the audio element, the analyser node,
//! local storage, the 2D canvas and the album cover image. Tests substitute
//! in-memory doubles.

use crate::error::Result;
use crate::types::{RgbaRaster, Rgb};

/// Playable media element
///
/// Lifecycle notifications (started, paused, ended, time advanced) are not
/// part of this trait: the host forwards them to the controller's `on_*`
/// handlers.
pub trait MediaSource {
    /// Point the element at a new audio locator
    ///
    /// Loading never starts playback by itself.
    fn load(&mut self, locator: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// True when not playing (including freshly loaded)
    fn is_paused(&self) -> bool;

    /// Move the playhead to an absolute position in seconds
    fn seek(&mut self, position_secs: f64) -> Result<()>;

    /// Output gain in `[0, 1]`
    fn set_volume(&mut self, level: f64) -> Result<()>;

    /// Track duration in seconds, `None` while unknown
    fn duration(&self) -> Option<f64>;

    /// Playhead position in seconds
    fn current_time(&self) -> f64;
}

/// Live time-domain analysis tap on the audio graph
pub trait AudioTap {
    /// Fill `buffer` with the most recent unsigned 8-bit samples
    ///
    /// 128 is silence. Implementations fill as much of `buffer` as they have
    /// data for.
    fn read_time_domain(&mut self, buffer: &mut [u8]);
}

/// Synchronous string key-value persistence
pub trait KeyValueStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// 2D drawing surface with path primitives
pub trait RenderSurface {
    /// Surface width in pixels
    fn width(&self) -> f64;

    /// Surface height in pixels
    fn height(&self) -> f64;

    /// Erase the whole surface
    fn clear(&mut self);

    /// Start a new path
    fn begin_path(&mut self);

    /// Stroke width in pixels
    fn set_line_width(&mut self, width: f64);

    /// Stroke color for subsequent strokes
    fn set_stroke_color(&mut self, color: Rgb);

    /// Move the pen without drawing
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a line segment to the current path
    fn line_to(&mut self, x: f64, y: f64);

    /// Stroke the current path
    fn stroke(&mut self);
}

/// Album art that may still be decoding
pub trait ArtworkImage {
    /// True once the image has fully loaded and decoded
    fn is_ready(&self) -> bool;

    /// Draw the image at its native size and read back the RGBA pixels
    fn rasterize(&self) -> Result<RgbaRaster>;
}

/// Starts loading album art
///
/// Completion is reported asynchronously by the host through
/// `PlaybackController::on_artwork_loaded`.
pub trait ArtworkLoader {
    /// Begin loading the image at `locator`
    fn load(&mut self, locator: &str) -> Result<()>;
}
