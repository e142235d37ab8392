//! Integration tests for the playback controller
//!
//! These tests walk real widget scenarios: selecting tracks, transport
//! buttons, auto-advance on end, progress readout and album-art color.


use test_helpers::*;
use vinyl_core::{ArtworkImage, KeyValueStore, PresentationColor, Result, Rgb, RgbaRaster, VinylError};
use vinyl_playback::{PlayerEvent, TransportState};
use vinyl_visual::ColorExtractor;

// ===== Track Loading =====

#[test]
fn starts_unloaded() {
    let player = controller(3);

    assert_eq!(player.current_index(), None);
    assert_eq!(player.state().signed_index(), -1);
    assert_eq!(player.transport(), TransportState::Unloaded);
    assert!(player.current_track().is_none());
    assert_eq!(player.view().active_index, None);
}

#[test]
fn load_track_updates_everything_but_does_not_play() {
    let mut player = controller(3);

    player.load_track(1).unwrap();

    assert_eq!(player.current_index(), Some(1));
    assert_eq!(player.media().src.as_deref(), Some("audio/1.mp3"));
    assert_eq!(player.media().play_calls, 0);
    assert_eq!(player.transport(), TransportState::Paused);

    let view = player.view();
    assert_eq!(view.title, "Song 1");
    assert_eq!(view.artist, "Artist 1");
    assert_eq!(view.active_index, Some(1));
    assert_eq!(view.background.as_deref(), Some("covers/1.jpg"));

    assert_eq!(player.artwork().requested, vec!["covers/1.jpg".to_string()]);
    assert_eq!(
        player.store().get("lastSongIndex").unwrap().as_deref(),
        Some("1")
    );

    assert_eq!(
        player.drain_events(),
        vec![PlayerEvent::TrackLoaded {
            index: 1,
            title: "Song 1".to_string(),
            artist: "Artist 1".to_string(),
            cover: "covers/1.jpg".to_string(),
        }]
    );
    assert!(!player.has_pending_events());
}

#[test]
fn only_one_entry_is_active() {
    let mut player = controller(4);

    player.load_track(0).unwrap();
    player.load_track(3).unwrap();

    assert_eq!(player.view().active_index, Some(3));
    assert_eq!(player.current_track().unwrap().title, "Song 3");
}

#[test]
fn load_track_out_of_bounds_changes_nothing() {
    let mut player = controller(3);
    player.load_track(2).unwrap();
    player.drain_events();

    let err = player.load_track(3).unwrap_err();

    assert!(matches!(err, VinylError::IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(player.current_index(), Some(2));
    assert_eq!(player.media().src.as_deref(), Some("audio/2.mp3"));
    assert!(player.drain_events().is_empty());
}

#[test]
fn select_loads_and_plays() {
    let mut player = controller(3);

    player.select(2).unwrap();

    assert_eq!(player.current_index(), Some(2));
    assert_eq!(player.transport(), TransportState::Playing);
    assert!(player.is_playing());
}

#[test]
fn persistence_failure_does_not_block_loading() {
    let mut player = controller_with_store(3, FailingStore);

    player.select(1).unwrap();

    assert_eq!(player.current_index(), Some(1));
    assert!(player.is_playing());
}

// ===== Transport =====

#[test]
fn toggle_play_alternates() {
    let mut player = controller(2);
    player.load_track(0).unwrap();

    player.toggle_play().unwrap();
    assert_eq!(player.transport(), TransportState::Playing);

    player.toggle_play().unwrap();
    assert_eq!(player.transport(), TransportState::Paused);

    player.toggle_play().unwrap();
    assert_eq!(player.transport(), TransportState::Playing);
}

#[test]
fn toggle_play_without_track_is_an_error() {
    let mut player = controller(2);

    assert!(matches!(player.toggle_play(), Err(VinylError::NoTrackLoaded)));
    assert_eq!(player.media().play_calls, 0);
}

#[test]
fn media_failure_propagates() {
    let mut player = controller(2);
    player.load_track(0).unwrap();
    player.media_mut().fail_play = true;

    assert!(matches!(player.toggle_play(), Err(VinylError::Media(_))));
}

#[test]
fn next_three_times_visits_one_two_zero() {
    let mut player = controller(3);
    player.load_track(0).unwrap();

    let mut visited = Vec::new();
    for _ in 0..3 {
        player.next().unwrap();
        visited.push(player.current_index().unwrap());
        assert!(player.is_playing());
    }

    assert_eq!(visited, vec![1, 2, 0]);
}

#[test]
fn previous_from_first_wraps_to_last() {
    let mut player = controller(3);
    player.load_track(0).unwrap();

    player.previous().unwrap();

    assert_eq!(player.current_index(), Some(2));
    assert!(player.is_playing());
}

#[test]
fn next_from_unloaded_starts_at_first_track() {
    let mut player = controller(5);

    player.next().unwrap();

    assert_eq!(player.current_index(), Some(0));
}

#[test]
fn previous_from_unloaded_steps_back_from_minus_one() {
    let mut player = controller(5);

    player.previous().unwrap();

    assert_eq!(player.current_index(), Some(3));
}

#[test]
fn previous_ignores_shuffle() {
    let mut player = controller(10);
    player.load_track(5).unwrap();
    player.set_shuffle(true);

    for expected in [4, 3, 2, 1, 0, 9] {
        player.previous().unwrap();
        assert_eq!(player.current_index(), Some(expected));
    }
}

#[test]
fn shuffle_picks_stay_in_range_and_play() {
    let mut player = controller(4);
    player.set_shuffle(true);

    for _ in 0..200 {
        player.next().unwrap();
        let index = player.current_index().unwrap();
        assert!(index < 4);
        assert!(player.is_playing());
    }
}

#[test]
fn shuffle_can_land_on_the_current_track() {
    let mut player = controller(2);
    player.load_track(0).unwrap();
    player.set_shuffle(true);

    let mut repeats = 0;
    let mut previous = 0;
    for _ in 0..200 {
        player.next().unwrap();
        let index = player.current_index().unwrap();
        if index == previous {
            repeats += 1;
        }
        previous = index;
    }

    // Uniform over two tracks: about half of the picks repeat
    assert!(repeats > 0);
}

#[test]
fn shuffle_with_same_seed_is_reproducible() {
    let picks = |mut player: TestController| {
        player.set_shuffle(true);
        (0..20)
            .map(|_| {
                player.next().unwrap();
                player.current_index().unwrap()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(picks(controller(10)), picks(controller(10)));
}

// ===== Track End =====

#[test]
fn ended_with_repeat_restarts_same_track() {
    let mut player = controller(3);
    player.select(1).unwrap();
    player.media_mut().current_time = 200.0;
    player.media_mut().paused = true;
    player.set_repeat(true);

    player.on_track_ended().unwrap();

    assert_eq!(player.current_index(), Some(1));
    assert_eq!(player.media().seeks, vec![0.0]);
    assert_eq!(player.media().current_time, 0.0);
    assert!(player.is_playing());
}

#[test]
fn ended_without_repeat_advances() {
    let mut player = controller(3);
    player.select(2).unwrap();
    player.media_mut().paused = true;

    player.on_track_ended().unwrap();

    assert_eq!(player.current_index(), Some(0));
    assert!(player.is_playing());
}

#[test]
fn ended_with_shuffle_picks_randomly() {
    let mut player = controller(6);
    player.select(0).unwrap();
    player.set_shuffle(true);

    player.on_track_ended().unwrap();

    assert!(player.current_index().unwrap() < 6);
    assert!(player.is_playing());
}

// ===== Modes =====

#[test]
fn mode_toggles_are_independent() {
    let mut player = controller(3);

    player.toggle_shuffle();
    assert!(player.state().shuffle);
    assert!(!player.state().repeat);

    player.toggle_repeat();
    assert!(player.state().shuffle);
    assert!(player.state().repeat);

    player.toggle_shuffle();
    assert!(!player.state().shuffle);
    assert!(player.state().repeat);

    assert!(!player.view().shuffle);
    assert!(player.view().repeat);

    let events = player.drain_events();
    assert_eq!(
        events,
        vec![
            PlayerEvent::ShuffleChanged { enabled: true },
            PlayerEvent::RepeatChanged { enabled: true },
            PlayerEvent::ShuffleChanged { enabled: false },
        ]
    );
}

#[test]
fn initial_flags_come_from_config() {
    let player: TestController = vinyl_playback::PlaybackController::new(
        playlist(3),
        FakeMedia::default(),
        vinyl_core::MemoryStore::new(),
        RecordingArtwork::default(),
        vinyl_playback::PlaybackConfig {
            shuffle: true,
            repeat: true,
            initial_volume: 0.4,
            ..config()
        },
    )
    .unwrap();

    assert!(player.state().shuffle);
    assert!(player.state().repeat);
    assert_eq!(player.media().volume, 0.4);
    assert_eq!(player.view().volume, 0.4);
}

// ===== Seek & Volume =====

#[test]
fn seek_scales_fraction_by_duration() {
    let mut player = controller(1);
    player.select(0).unwrap();
    player.media_mut().duration = Some(200.0);

    player.seek(0.25).unwrap();

    assert_eq!(player.media().seeks, vec![50.0]);
}

#[test]
fn seek_clamps_fraction() {
    let mut player = controller(1);
    player.select(0).unwrap();
    player.media_mut().duration = Some(100.0);

    player.seek(1.5).unwrap();
    player.seek(-0.5).unwrap();

    assert_eq!(player.media().seeks, vec![100.0, 0.0]);
}

#[test]
fn seek_with_unknown_duration_is_a_no_op() {
    let mut player = controller(1);
    player.select(0).unwrap();

    player.media_mut().duration = None;
    player.seek(0.5).unwrap();

    player.media_mut().duration = Some(f64::NAN);
    player.seek(0.5).unwrap();

    player.media_mut().duration = Some(0.0);
    player.seek(0.5).unwrap();

    assert!(player.media().seeks.is_empty());
}

#[test]
fn volume_is_applied_and_clamped() {
    let mut player = controller(1);

    player.set_volume(0.3).unwrap();
    assert_eq!(player.media().volume, 0.3);

    player.set_volume(7.0).unwrap();
    assert_eq!(player.media().volume, 1.0);

    player.set_volume(-1.0).unwrap();
    assert_eq!(player.media().volume, 0.0);
    assert_eq!(player.view().volume, 0.0);

    let events = player.drain_events();
    assert_eq!(events.last(), Some(&PlayerEvent::VolumeChanged { level: 0.0 }));
}

// ===== Media Events =====

#[test]
fn time_advanced_updates_progress_readout() {
    let mut player = controller(1);
    player.select(0).unwrap();
    player.drain_events();

    player.media_mut().duration = Some(200.0);
    player.media_mut().current_time = 65.0;
    player.on_time_advanced();

    let view = player.view();
    assert_eq!(view.elapsed, "1:05");
    assert_eq!(view.total, "3:20");
    assert_eq!(view.progress, 65.0 / 200.0);

    assert_eq!(
        player.drain_events(),
        vec![PlayerEvent::Progress {
            fraction: 65.0 / 200.0,
            elapsed: "1:05".to_string(),
            total: "3:20".to_string(),
        }]
    );
}

#[test]
fn time_advanced_without_duration_is_skipped_then_retried() {
    let mut player = controller(1);
    player.select(0).unwrap();
    player.drain_events();

    player.media_mut().current_time = 3.0;
    player.on_time_advanced();
    assert!(player.drain_events().is_empty());
    assert_eq!(player.view().elapsed, "0:00");

    player.media_mut().duration = Some(10.0);
    player.on_time_advanced();
    assert_eq!(player.view().elapsed, "0:03");
    assert_eq!(player.view().total, "0:10");
}

#[test]
fn started_and_paused_drive_playing_indicator() {
    let mut player = controller(1);
    player.select(0).unwrap();
    player.drain_events();

    player.on_started();
    assert!(player.view().playing);

    player.on_paused();
    assert!(!player.view().playing);

    assert_eq!(
        player.drain_events(),
        vec![PlayerEvent::Started, PlayerEvent::Paused]
    );
}

// ===== Album Art =====

struct StillLoading;

impl ArtworkImage for StillLoading {
    fn is_ready(&self) -> bool {
        false
    }

    fn rasterize(&self) -> Result<RgbaRaster> {
        Err(VinylError::image("not decoded"))
    }
}

#[test]
fn artwork_loaded_publishes_color() {
    let mut player = controller(2);
    let color: PresentationColor = player.presentation_color();
    assert_eq!(color.get(), Rgb::GOLD);

    player.load_track(0).unwrap();
    player.drain_events();

    let published = player
        .on_artwork_loaded(&RgbaRaster::solid(50, 40, 20, 120, 220))
        .unwrap();

    assert_eq!(published, Some(Rgb::new(20, 120, 220)));
    assert_eq!(color.get(), Rgb::new(20, 120, 220));
    assert_eq!(
        player.drain_events(),
        vec![PlayerEvent::ColorChanged {
            color: Rgb::new(20, 120, 220)
        }]
    );
}

#[test]
fn color_is_recomputed_on_each_load() {
    let mut player = controller(2);
    let color = player.presentation_color();

    player.load_track(0).unwrap();
    player
        .on_artwork_loaded(&RgbaRaster::solid(10, 10, 255, 0, 0))
        .unwrap();
    player.load_track(1).unwrap();
    player
        .on_artwork_loaded(&RgbaRaster::solid(10, 10, 0, 0, 255))
        .unwrap();

    assert_eq!(color.get(), Rgb::new(0, 0, 255));
}

#[test]
fn artwork_not_ready_keeps_previous_color() {
    let mut player = controller(2);
    player.load_track(0).unwrap();
    player.drain_events();

    assert_eq!(player.on_artwork_loaded(&StillLoading).unwrap(), None);
    assert_eq!(player.presentation_color().get(), Rgb::GOLD);
    assert!(player.drain_events().is_empty());
}

#[test]
fn custom_extractor_stride() {
    // Pixel 0 red, pixel 1 blue: stride 1 averages both, stride 2 sees only red
    let raster = RgbaRaster::new(2, 1, vec![200, 0, 0, 255, 0, 0, 200, 255]).unwrap();

    let mut dense = controller(1).with_color_extractor(ColorExtractor::new(1));
    assert_eq!(
        dense.on_artwork_loaded(&raster).unwrap(),
        Some(Rgb::new(100, 0, 100))
    );

    let mut sparse = controller(1).with_color_extractor(ColorExtractor::new(2));
    assert_eq!(
        sparse.on_artwork_loaded(&raster).unwrap(),
        Some(Rgb::new(200, 0, 0))
    );
}
