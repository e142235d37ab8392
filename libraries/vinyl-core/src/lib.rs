//! Vinyl Player Core
//!
//! Platform-agnostic types, capability traits, and error handling shared by
//! the playback controller and the visualization pipeline.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `Rgb`, `PresentationColor`, `RgbaRaster`
//! - **Capability Traits**: `MediaSource`, `AudioTap`, `KeyValueStore`,
//!   `RenderSurface`, `ArtworkImage`, `ArtworkLoader`
//! - **Error Handling**: Unified `VinylError` and `Result` types
//!
//! Everything the browser owns (the audio element, the canvas, local storage,
//! the album cover image) is reached through a trait so the controller and
//! renderers can run against test doubles.
//!
//! # Example
//!
//! ```rust
//! use vinyl_core::{Playlist, Track, KeyValueStore, MemoryStore};
//!
//! let playlist = Playlist::new(vec![
//!     Track::new("audio/one.mp3", "One", "First Artist", "covers/one.jpg"),
//!     Track::new("audio/two.mp3", "Two", "Second Artist", "covers/two.jpg"),
//! ])
//! .unwrap();
//! assert_eq!(playlist.len(), 2);
//!
//! let mut store = MemoryStore::new();
//! store.set("lastSongIndex", "1").unwrap();
//! assert_eq!(store.get("lastSongIndex").unwrap().as_deref(), Some("1"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

pub use error::{Result, VinylError};
pub use storage::MemoryStore;
pub use traits::{
    ArtworkImage, ArtworkLoader, AudioTap, KeyValueStore, MediaSource, RenderSurface,
};
pub use types::{Playlist, PresentationColor, Rgb, RgbaRaster, Track};
