//! Vinyl Player - Playback Control
//!
//! Platform-agnostic playback control for the Vinyl Player widget.
//!
//! This crate provides:
//! - Track selection over a fixed playlist (next/previous wrap around)
//! - Shuffle (uniform random pick) and repeat (restart on end)
//! - Seek by fraction and volume control
//! - Progress readout (`m:ss`) driven by media time notifications
//! - Last-played persistence and startup restore
//! - Album-art color publishing for the visualizer
//! - Browser bindings behind the `wasm` feature
//!
//! # Architecture
//!
//! `vinyl-playback` never touches the DOM directly. The media element, the
//! key-value store and the artwork loader are `vinyl_core` traits injected
//! into [`PlaybackController`]. Media lifecycle notifications arrive through
//! the controller's `on_*` methods; UI updates leave through
//! [`PlaybackController::drain_events`] and [`PlaybackController::view`].
//!
//! # Example
//!
//! ```rust
//! use vinyl_core::{ArtworkLoader, MediaSource, MemoryStore, Playlist, Result, Track};
//! use vinyl_playback::{PlaybackConfig, PlaybackController, TransportState};
//!
//! #[derive(Default)]
//! struct Element { src: String, paused: bool }
//!
//! impl MediaSource for Element {
//!     fn load(&mut self, locator: &str) -> Result<()> { self.src = locator.into(); self.paused = true; Ok(()) }
//!     fn play(&mut self) -> Result<()> { self.paused = false; Ok(()) }
//!     fn pause(&mut self) -> Result<()> { self.paused = true; Ok(()) }
//!     fn is_paused(&self) -> bool { self.paused }
//!     fn seek(&mut self, _position_secs: f64) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _level: f64) -> Result<()> { Ok(()) }
//!     fn duration(&self) -> Option<f64> { Some(180.0) }
//!     fn current_time(&self) -> f64 { 0.0 }
//! }
//!
//! struct NoArtwork;
//! impl ArtworkLoader for NoArtwork {
//!     fn load(&mut self, _locator: &str) -> Result<()> { Ok(()) }
//! }
//!
//! let playlist = Playlist::new(vec![
//!     Track::new("a.mp3", "A", "Artist", "a.jpg"),
//!     Track::new("b.mp3", "B", "Artist", "b.jpg"),
//! ])?;
//!
//! let mut player = PlaybackController::new(
//!     playlist,
//!     Element::default(),
//!     MemoryStore::new(),
//!     NoArtwork,
//!     PlaybackConfig::default(),
//! )?;
//!
//! assert_eq!(player.transport(), TransportState::Unloaded);
//!
//! player.next()?;
//! assert_eq!(player.current_index(), Some(0));
//! assert_eq!(player.transport(), TransportState::Playing);
//! # Ok::<(), vinyl_core::VinylError>(())
//! ```

mod config;
mod controller;
mod events;
mod restore;
mod time;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use config::{PlaybackConfig, DEFAULT_STORAGE_KEY};
pub use controller::PlaybackController;
pub use events::PlayerEvent;
pub use restore::parse_saved_index;
pub use time::format_time;
pub use types::{PlaybackState, PlayerView, TransportState};
