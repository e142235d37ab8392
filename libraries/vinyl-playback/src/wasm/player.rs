//! JavaScript-facing player widget

use super::{
    describe, document, element_by_id, window, AnalyserTap, AnimationFrameScheduler,
    CanvasSurface, HtmlArtwork, HtmlMediaSource, ImageArtworkLoader, LocalStorageStore,
    PlayerConfig,
};
use crate::{PlaybackController, PlayerEvent, TransportState};
use js_sys::Function;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use vinyl_core::{Playlist, Track, VinylError};
use vinyl_visual::{ColorExtractor, FrameScheduler, WaveformRenderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AudioContext, Event, EventTarget, HtmlAudioElement, HtmlCanvasElement, HtmlElement,
    HtmlImageElement,
};

type BrowserController = PlaybackController<HtmlMediaSource, LocalStorageStore, ImageArtworkLoader>;

type Listener = Closure<dyn FnMut(Event)>;

fn to_js(error: VinylError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// Shared state reachable from DOM event listeners
struct Shared {
    controller: RefCell<BrowserController>,
    on_event: RefCell<Option<Function>>,
    color_target: Option<(HtmlElement, String)>,
}

impl Shared {
    /// Run `action` on the controller, then deliver whatever it queued
    fn dispatch<F>(&self, action: F) -> vinyl_core::Result<()>
    where
        F: FnOnce(&mut BrowserController) -> vinyl_core::Result<()>,
    {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| VinylError::media("player is busy"))?;

        let result = action(&mut controller);
        let events = controller.drain_events();
        drop(controller);

        self.deliver(events);
        result
    }

    fn deliver(&self, events: Vec<PlayerEvent>) {
        for event in &events {
            if let PlayerEvent::ColorChanged { color } = event {
                self.apply_color(&color.to_css());
            }
        }

        let callback = self.on_event.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };

        for event in events {
            match serde_wasm_bindgen::to_value(&event) {
                Ok(value) => {
                    if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                        warn!("Event callback threw: {}", describe(&e));
                    }
                }
                Err(e) => warn!("Could not convert event {:?}: {}", event, e),
            }
        }
    }

    fn apply_color(&self, css: &str) {
        if let Some((root, property)) = &self.color_target {
            if let Err(e) = root.style().set_property(property, css) {
                warn!("Could not set {}: {}", property, describe(&e));
            }
        }
    }
}

/// Music player widget bound to the page's audio, canvas and cover elements
///
/// Construction restores the last played track (without playing it) and
/// starts the waveform visualizer. UI changes are delivered to the callback
/// registered with `onEvent`; `view()` returns the full presentation state.
#[wasm_bindgen]
pub struct WasmPlayer {
    shared: Rc<Shared>,
    audio_context: AudioContext,

    // DOM listeners; freed with the player
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create the player
    ///
    /// `tracks` is an array of `{ src, title, artist, cover }`; `config` is an
    /// optional `PlayerConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(tracks: JsValue, config: JsValue) -> Result<WasmPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let config: PlayerConfig = if config.is_undefined() || config.is_null() {
            PlayerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate().map_err(to_js)?;

        let tracks: Vec<Track> = serde_wasm_bindgen::from_value(tracks)?;
        let playlist = Playlist::new(tracks).map_err(to_js)?;

        let document = document().map_err(to_js)?;
        let audio: HtmlAudioElement = element_by_id(&document, &config.audio_id).map_err(to_js)?;
        let canvas: HtmlCanvasElement =
            element_by_id(&document, &config.canvas_id).map_err(to_js)?;
        let cover: HtmlImageElement = element_by_id(&document, &config.cover_id).map_err(to_js)?;

        let tap = AnalyserTap::attach(&audio, config.visualizer.fft_size).map_err(to_js)?;
        let audio_context = tap.context().clone();

        let store = LocalStorageStore::open().map_err(to_js)?;
        let controller = PlaybackController::new(
            playlist,
            HtmlMediaSource::new(audio.clone()),
            store,
            ImageArtworkLoader::new(cover.clone()),
            config.playback.clone(),
        )
        .map_err(to_js)?
        .with_color_extractor(ColorExtractor::new(config.visualizer.color_pixel_stride));

        let color = controller.presentation_color();

        let color_target = if config.color_property.is_empty() {
            None
        } else {
            document
                .document_element()
                .and_then(|root| root.dyn_into::<HtmlElement>().ok())
                .map(|root| (root, config.color_property.clone()))
        };

        let shared = Rc::new(Shared {
            controller: RefCell::new(controller),
            on_event: RefCell::new(None),
            color_target,
        });

        let mut player = WasmPlayer {
            shared,
            audio_context,
            _listeners: Vec::new(),
        };

        player.listen(&audio, "play", |c| {
            c.on_started();
            Ok(())
        })?;
        player.listen(&audio, "pause", |c| {
            c.on_paused();
            Ok(())
        })?;
        player.listen(&audio, "ended", BrowserController::on_track_ended)?;
        player.listen(&audio, "timeupdate", |c| {
            c.on_time_advanced();
            Ok(())
        })?;

        let loaded = cover.clone();
        player.listen(&cover, "load", move |c| {
            c.on_artwork_loaded(&HtmlArtwork::new(loaded.clone()))
                .map(|_| ())
        })?;

        // Restored events stay queued until a callback is registered
        match player.shared.controller.borrow_mut().restore() {
            Ok(Some(index)) => debug!("Restored track {}", index),
            Ok(None) => {}
            Err(e) => warn!("Restore failed: {}", e),
        }

        let width = window()
            .map_err(to_js)?
            .inner_width()?
            .as_f64()
            .unwrap_or_default();
        let surface = CanvasSurface::new(canvas).map_err(to_js)?;
        surface.resize(width as u32, config.visualizer.surface_height as u32);

        let mut renderer = WaveformRenderer::new(&config.visualizer, color);
        let mut tap = tap;
        let mut surface = surface;
        AnimationFrameScheduler::new()
            .map_err(to_js)?
            .start(Box::new(move || renderer.render_frame(&mut tap, &mut surface)));

        Ok(player)
    }

    /// Register the UI event callback and flush anything already queued
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&self, callback: Function) {
        match self.shared.on_event.try_borrow_mut() {
            Ok(mut slot) => *slot = Some(callback),
            Err(_) => {
                warn!("Cannot replace the event callback from inside it");
                return;
            }
        }
        if let Err(e) = self.shared.dispatch(|_| Ok(())) {
            warn!("Could not flush events: {}", e);
        }
    }

    // ===== Transport =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&self) -> Result<(), JsValue> {
        self.user_action(BrowserController::toggle_play)
    }

    pub fn next(&self) -> Result<(), JsValue> {
        self.user_action(BrowserController::next)
    }

    pub fn previous(&self) -> Result<(), JsValue> {
        self.user_action(BrowserController::previous)
    }

    /// Playlist entry clicked
    pub fn select(&self, index: usize) -> Result<(), JsValue> {
        self.user_action(|c| c.select(index))
    }

    /// Progress bar dragged, `fraction` in `[0, 1]`
    pub fn seek(&self, fraction: f64) -> Result<(), JsValue> {
        self.user_action(|c| c.seek(fraction))
    }

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&self, level: f64) -> Result<(), JsValue> {
        self.user_action(|c| c.set_volume(level))
    }

    // ===== Modes =====

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&self) -> Result<(), JsValue> {
        self.user_action(|c| {
            c.toggle_shuffle();
            Ok(())
        })
    }

    #[wasm_bindgen(js_name = toggleRepeat)]
    pub fn toggle_repeat(&self) -> Result<(), JsValue> {
        self.user_action(|c| {
            c.toggle_repeat();
            Ok(())
        })
    }

    #[wasm_bindgen(js_name = setShuffle)]
    pub fn set_shuffle(&self, enabled: bool) -> Result<(), JsValue> {
        self.user_action(|c| {
            c.set_shuffle(enabled);
            Ok(())
        })
    }

    #[wasm_bindgen(js_name = setRepeat)]
    pub fn set_repeat(&self, enabled: bool) -> Result<(), JsValue> {
        self.user_action(|c| {
            c.set_repeat(enabled);
            Ok(())
        })
    }

    // ===== State Queries =====

    /// Full presentation state as a plain object
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let controller = self.shared.controller.borrow();
        Ok(serde_wasm_bindgen::to_value(controller.view())?)
    }

    /// "unloaded", "paused" or "playing"
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        match self.shared.controller.borrow().transport() {
            TransportState::Unloaded => "unloaded".to_string(),
            TransportState::Paused => "paused".to_string(),
            TransportState::Playing => "playing".to_string(),
        }
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> Option<usize> {
        self.shared.controller.borrow().current_index()
    }

    #[wasm_bindgen(js_name = trackCount)]
    pub fn track_count(&self) -> usize {
        self.shared.controller.borrow().playlist().len()
    }

    /// Current album-art color as `rgb(r,g,b)`
    pub fn color(&self) -> String {
        self.shared.controller.borrow().presentation_color().get().to_css()
    }
}

impl WasmPlayer {
    /// Handle a user gesture
    ///
    /// Browsers start the audio context suspended until the page sees one.
    fn user_action<F>(&self, action: F) -> Result<(), JsValue>
    where
        F: FnOnce(&mut BrowserController) -> vinyl_core::Result<()>,
    {
        if let Err(e) = self.audio_context.resume() {
            debug!("Audio context resume failed: {}", describe(&e));
        }

        self.shared.dispatch(action).map_err(to_js)
    }

    /// Forward a DOM event on `target` to the controller
    fn listen<F>(&mut self, target: &EventTarget, event: &str, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut(&mut BrowserController) -> vinyl_core::Result<()> + 'static,
    {
        let shared = Rc::clone(&self.shared);
        let name = event.to_string();

        let listener = Listener::new(move |_event: Event| {
            if let Err(e) = shared.dispatch(&mut handler) {
                warn!("{} handler failed: {}", name, e);
            }
        });

        target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self._listeners.push(listener);
        Ok(())
    }
}
