//! Core types for playback control

use serde::{Deserialize, Serialize};

/// Playlist position and mode flags
///
/// Whether audio is playing is not stored here; it is read from the media
/// source (see [`TransportState`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Loaded track, `None` until a track has been selected or restored
    pub current_index: Option<usize>,

    /// Random pick on `next`
    pub shuffle: bool,

    /// Restart the current track when it ends
    pub repeat: bool,
}

impl PlaybackState {
    /// Index as a signed value, `-1` when nothing is loaded
    pub fn signed_index(&self) -> i64 {
        self.current_index.map_or(-1, |i| i as i64)
    }
}

/// Media transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No track loaded
    Unloaded,

    /// Track loaded, not playing
    Paused,

    /// Track loaded and playing
    Playing,
}

/// Presentation state for the widget chrome
///
/// Mirrors what the page shows: now-playing text, the highlighted playlist
/// entry, progress readout, button states and the artwork backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// Displayed title
    pub title: String,

    /// Displayed artist
    pub artist: String,

    /// Highlighted playlist entry (at most one)
    pub active_index: Option<usize>,

    /// Elapsed time text (`m:ss`)
    pub elapsed: String,

    /// Total time text (`m:ss`)
    pub total: String,

    /// Progress through the track in `[0, 1]`
    pub progress: f64,

    /// Play/pause glyph, equalizer and vinyl-spin animation
    pub playing: bool,

    /// Shuffle button highlight
    pub shuffle: bool,

    /// Repeat button highlight
    pub repeat: bool,

    /// Volume slider position in `[0, 1]`
    pub volume: f64,

    /// Album art shown behind the player
    pub background: Option<String>,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            active_index: None,
            elapsed: "0:00".to_string(),
            total: "0:00".to_string(),
            progress: 0.0,
            playing: false,
            shuffle: false,
            repeat: false,
            volume: 1.0,
            background: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unloaded_state_is_minus_one() {
        let state = PlaybackState::default();
        assert_eq!(state.signed_index(), -1);

        let loaded = PlaybackState {
            current_index: Some(4),
            ..state
        };
        assert_eq!(loaded.signed_index(), 4);
    }
}
