//! Core error types for Vinyl Player

use thiserror::Error;

/// Result type alias using `VinylError`
pub type Result<T> = std::result::Result<T, VinylError>;

/// Core error type for Vinyl Player
#[derive(Error, Debug)]
pub enum VinylError {
    /// Media source rejected a load/play/pause/seek/volume request
    #[error("Media error: {0}")]
    Media(String),

    /// Key-value store read or write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Album art could not be rasterized
    #[error("Image error: {0}")]
    Image(String),

    /// Track index outside the playlist
    #[error("Track index {index} out of bounds (playlist has {len} tracks)")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Playlist length
        len: usize,
    },

    /// A playlist must contain at least one track
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Operation needs a loaded track
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Configuration value rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl VinylError {
    /// Create a media error
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an image error
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
