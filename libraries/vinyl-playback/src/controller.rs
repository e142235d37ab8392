//! Playback controller - core orchestration
//!
//! Owns the playlist position and the shuffle/repeat flags, drives the media
//! source, persists the last played index, and keeps the presentation state
//! (view + album-art color) in step with media lifecycle events.

use crate::{
    config::PlaybackConfig,
    events::PlayerEvent,
    restore::parse_saved_index,
    time::format_time,
    types::{PlaybackState, PlayerView, TransportState},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};
use vinyl_core::{
    ArtworkImage, ArtworkLoader, KeyValueStore, MediaSource, Playlist, PresentationColor, Result,
    Rgb, Track, VinylError,
};
use vinyl_visual::ColorExtractor;

/// Playback controller
///
/// Generic over the three capabilities it drives, so hosts and tests can
/// plug in their own media element, store and artwork loader.
///
/// Transport actions (`next`, `previous`, `select`, repeat restart) start
/// playback; `load_track` and `restore` never do.
pub struct PlaybackController<M, S, A> {
    playlist: Playlist,
    media: M,
    store: S,
    artwork: A,

    state: PlaybackState,
    view: PlayerView,
    color: PresentationColor,
    extractor: ColorExtractor,

    storage_key: String,
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<M, S, A> PlaybackController<M, S, A>
where
    M: MediaSource,
    S: KeyValueStore,
    A: ArtworkLoader,
{
    /// Create a controller in the Unloaded state
    ///
    /// Applies the configured volume and flags. Does not consult the store;
    /// call [`restore`](Self::restore) for that.
    pub fn new(
        playlist: Playlist,
        mut media: M,
        store: S,
        artwork: A,
        config: PlaybackConfig,
    ) -> Result<Self> {
        config.validate()?;
        media.set_volume(config.initial_volume)?;

        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let view = PlayerView {
            shuffle: config.shuffle,
            repeat: config.repeat,
            volume: config.initial_volume,
            ..PlayerView::default()
        };

        Ok(Self {
            playlist,
            media,
            store,
            artwork,
            state: PlaybackState {
                current_index: None,
                shuffle: config.shuffle,
                repeat: config.repeat,
            },
            view,
            color: PresentationColor::new(Rgb::GOLD),
            extractor: ColorExtractor::default(),
            storage_key: config.storage_key,
            rng,
            pending_events: Vec::new(),
        })
    }

    /// Replace the color extractor (e.g. to change the pixel stride)
    pub fn with_color_extractor(mut self, extractor: ColorExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    // ===== Startup =====

    /// Reload the last played track, if one was saved
    ///
    /// Returns the restored index. A missing, unreadable, unparsable or
    /// out-of-range value leaves the controller Unloaded. Playback is not
    /// started.
    pub fn restore(&mut self) -> Result<Option<usize>> {
        let saved = match self.store.get(&self.storage_key) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Could not read saved track index: {}", e);
                return Ok(None);
            }
        };

        let Some(raw) = saved else {
            debug!("No saved track index, staying unloaded");
            return Ok(None);
        };

        match parse_saved_index(&raw, self.playlist.len()) {
            Some(index) => {
                self.load_track(index)?;
                debug!("Restored track {}", index);
                Ok(Some(index))
            }
            None => {
                warn!("Ignoring saved track index {:?}", raw);
                Ok(None)
            }
        }
    }

    // ===== Track Selection =====

    /// Load the track at `index` without starting playback
    ///
    /// Points the media source at the track, updates the now-playing text and
    /// active entry, requests the album art and persists the index.
    pub fn load_track(&mut self, index: usize) -> Result<()> {
        let track = self
            .playlist
            .get(index)
            .cloned()
            .ok_or(VinylError::IndexOutOfBounds {
                index,
                len: self.playlist.len(),
            })?;

        self.media.load(&track.src)?;

        self.view.title.clone_from(&track.title);
        self.view.artist.clone_from(&track.artist);
        self.view.active_index = Some(index);
        self.view.background = Some(track.cover.clone());
        self.state.current_index = Some(index);

        if let Err(e) = self.artwork.load(&track.cover) {
            warn!("Could not load artwork {}: {}", track.cover, e);
        }

        if let Err(e) = self.store.set(&self.storage_key, &index.to_string()) {
            warn!("Could not persist track index {}: {}", index, e);
        }

        debug!("Loaded track {} ({} - {})", index, track.artist, track.title);

        self.pending_events.push(PlayerEvent::TrackLoaded {
            index,
            title: track.title,
            artist: track.artist,
            cover: track.cover,
        });

        Ok(())
    }

    /// Load the track at `index` and play it (playlist entry clicked)
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.load_track(index)?;
        self.media.play()
    }

    // ===== Playback Control =====

    /// Play if paused, pause otherwise
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.state.current_index.is_none() {
            return Err(VinylError::NoTrackLoaded);
        }

        if self.media.is_paused() {
            self.media.play()
        } else {
            self.media.pause()
        }
    }

    /// Advance to the next track and play it
    ///
    /// With shuffle on, any track may be picked, including the current one.
    /// Otherwise wraps from the last track to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let len = self.playlist.len();
        let index = if self.state.shuffle {
            self.rng.gen_range(0..len)
        } else {
            step_index(self.state.signed_index(), 1, len)
        };

        self.load_track(index)?;
        self.media.play()
    }

    /// Go back one track and play it
    ///
    /// Never randomized; wraps from the first track to the last.
    pub fn previous(&mut self) -> Result<()> {
        let index = step_index(self.state.signed_index(), -1, self.playlist.len());

        self.load_track(index)?;
        self.media.play()
    }

    /// Move the playhead to `fraction` of the track
    ///
    /// Skipped while the duration is unknown.
    pub fn seek(&mut self, fraction: f64) -> Result<()> {
        let Some(duration) = self.known_duration() else {
            debug!("Duration unknown, ignoring seek");
            return Ok(());
        };

        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.media.seek(fraction * duration)
    }

    /// Set output gain, clamped to `[0, 1]`
    pub fn set_volume(&mut self, level: f64) -> Result<()> {
        let level = if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        };

        self.media.set_volume(level)?;
        self.view.volume = level;
        self.pending_events.push(PlayerEvent::VolumeChanged { level });
        Ok(())
    }

    // ===== Modes =====

    pub fn set_shuffle(&mut self, enabled: bool) {
        self.state.shuffle = enabled;
        self.view.shuffle = enabled;
        self.pending_events.push(PlayerEvent::ShuffleChanged { enabled });
    }

    pub fn set_repeat(&mut self, enabled: bool) {
        self.state.repeat = enabled;
        self.view.repeat = enabled;
        self.pending_events.push(PlayerEvent::RepeatChanged { enabled });
    }

    /// Flip shuffle (shuffle button)
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.state.shuffle);
    }

    /// Flip repeat (repeat button)
    pub fn toggle_repeat(&mut self) {
        self.set_repeat(!self.state.repeat);
    }

    // ===== Media Events =====

    /// Media source started playing
    pub fn on_started(&mut self) {
        self.view.playing = true;
        self.pending_events.push(PlayerEvent::Started);
    }

    /// Media source paused
    pub fn on_paused(&mut self) {
        self.view.playing = false;
        self.pending_events.push(PlayerEvent::Paused);
    }

    /// Current track reached its end
    ///
    /// Repeat restarts the same track; otherwise behaves exactly like `next`.
    pub fn on_track_ended(&mut self) -> Result<()> {
        if self.state.repeat {
            debug!("Track ended, repeating");
            self.media.seek(0.0)?;
            return self.media.play();
        }

        self.next()
    }

    /// Playhead moved; refresh the progress readout
    ///
    /// Skipped while the duration is unknown; the next notification retries.
    pub fn on_time_advanced(&mut self) {
        let Some(duration) = self.known_duration() else {
            return;
        };

        let current = self.media.current_time();
        let fraction = current / duration;

        self.view.progress = fraction;
        self.view.elapsed = format_time(current);
        self.view.total = format_time(duration);

        self.pending_events.push(PlayerEvent::Progress {
            fraction,
            elapsed: self.view.elapsed.clone(),
            total: self.view.total.clone(),
        });
    }

    /// Album art finished loading; recompute the presentation color
    ///
    /// Returns the new color, or `None` if the image was not ready.
    pub fn on_artwork_loaded(&mut self, image: &dyn ArtworkImage) -> Result<Option<Rgb>> {
        let color = self.extractor.publish(image, &self.color)?;
        if let Some(color) = color {
            self.pending_events.push(PlayerEvent::ColorChanged { color });
        }
        Ok(color)
    }

    // ===== State Queries =====

    /// Playlist position and flags
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Loaded index, `None` when Unloaded
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state
            .current_index
            .and_then(|index| self.playlist.get(index))
    }

    /// Transport state derived from the media source
    pub fn transport(&self) -> TransportState {
        match self.state.current_index {
            None => TransportState::Unloaded,
            Some(_) if self.media.is_paused() => TransportState::Paused,
            Some(_) => TransportState::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.transport() == TransportState::Playing
    }

    pub fn view(&self) -> &PlayerView {
        &self.view
    }

    /// Shared handle to the album-art color
    pub fn presentation_color(&self) -> PresentationColor {
        self.color.clone()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn artwork(&self) -> &A {
        &self.artwork
    }

    // ===== Events =====

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn known_duration(&self) -> Option<f64> {
        self.media.duration().filter(|d| d.is_finite() && *d > 0.0)
    }
}

/// Move `current` by `delta` around a playlist of `len` tracks
///
/// `current` is `-1` when nothing is loaded, so `next` from Unloaded lands on
/// the first track.
fn step_index(current: i64, delta: i64, len: usize) -> usize {
    (current + delta).rem_euclid(len as i64) as usize
}
