//! Track and playlist types

use crate::error::{Result, VinylError};
use serde::{Deserialize, Serialize};

/// A single playable entry
///
/// Immutable once part of a [`Playlist`]; the playlist assigns `index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Position in the playlist (assigned by `Playlist::new`)
    #[serde(default)]
    pub index: usize,

    /// Audio source locator handed to the media source
    pub src: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album art locator
    pub cover: String,
}

impl Track {
    /// Create a track; `index` is filled in when added to a playlist
    pub fn new(
        src: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        cover: impl Into<String>,
    ) -> Self {
        Self {
            index: 0,
            src: src.into(),
            title: title.into(),
            artist: artist.into(),
            cover: cover.into(),
        }
    }
}

/// Fixed, ordered, non-empty sequence of tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist, numbering tracks by position
    ///
    /// # Errors
    /// Returns `VinylError::EmptyPlaylist` for an empty sequence
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(VinylError::EmptyPlaylist);
        }

        let tracks = tracks
            .into_iter()
            .enumerate()
            .map(|(index, track)| Track { index, ..track })
            .collect();

        Ok(Self { tracks })
    }

    /// Parse a JSON array of tracks
    pub fn from_json(json: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(json)?;
        Self::new(tracks)
    }

    /// Number of tracks (never zero)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Iterate tracks in order
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}
