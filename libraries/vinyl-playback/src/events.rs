//! Player Events
//!
//! Change notifications for the widget chrome. The controller queues them as
//! it mutates state; the host drains and renders them.

use serde::{Deserialize, Serialize};
use vinyl_core::Rgb;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// A track was loaded (not necessarily playing)
    TrackLoaded {
        index: usize,
        title: String,
        artist: String,
        cover: String,
    },

    /// Media source reported playback started
    Started,

    /// Media source reported playback paused
    Paused,

    /// Elapsed time moved
    Progress {
        /// Fraction of the track played, `[0, 1]`
        fraction: f64,
        elapsed: String,
        total: String,
    },

    /// Album art color recomputed
    ColorChanged { color: Rgb },

    ShuffleChanged { enabled: bool },

    RepeatChanged { enabled: bool },

    VolumeChanged { level: f64 },
}
