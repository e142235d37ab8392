//! Audio element and Web Audio analyser adapters

use super::describe;
use tracing::debug;
use vinyl_core::{AudioTap, MediaSource, Result, VinylError};
use web_sys::{AnalyserNode, AudioContext, HtmlAudioElement};

/// [`MediaSource`] backed by an `<audio>` element
#[derive(Debug, Clone)]
pub struct HtmlMediaSource {
    element: HtmlAudioElement,
}

impl HtmlMediaSource {
    pub fn new(element: HtmlAudioElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl MediaSource for HtmlMediaSource {
    fn load(&mut self, locator: &str) -> Result<()> {
        self.element.set_src(locator);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        // Autoplay rejections surface on the returned promise, not here
        self.element
            .play()
            .map(|_| ())
            .map_err(|e| VinylError::media(describe(&e)))
    }

    fn pause(&mut self) -> Result<()> {
        self.element
            .pause()
            .map_err(|e| VinylError::media(describe(&e)))
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn seek(&mut self, position_secs: f64) -> Result<()> {
        self.element.set_current_time(position_secs);
        Ok(())
    }

    fn set_volume(&mut self, level: f64) -> Result<()> {
        self.element.set_volume(level);
        Ok(())
    }

    fn duration(&self) -> Option<f64> {
        // NaN before metadata, +Infinity for streams
        Some(self.element.duration()).filter(|d| d.is_finite())
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }
}

/// [`AudioTap`] on an `AnalyserNode` spliced between the element and the
/// speakers
pub struct AnalyserTap {
    context: AudioContext,
    node: AnalyserNode,
}

impl AnalyserTap {
    /// Route `element` through a new analyser with the given FFT size
    ///
    /// An element can only be attached to one audio graph, so call this once.
    pub fn attach(element: &HtmlAudioElement, fft_size: u32) -> Result<Self> {
        let graph = |e: wasm_bindgen::JsValue| VinylError::media(describe(&e));

        let context = AudioContext::new().map_err(graph)?;
        let node = context.create_analyser().map_err(graph)?;
        node.set_fft_size(fft_size);

        let source = context.create_media_element_source(element).map_err(graph)?;
        source.connect_with_audio_node(&node).map_err(graph)?;
        node.connect_with_audio_node(&context.destination())
            .map_err(graph)?;

        debug!(
            "Analyser attached: fft {} -> {} bins",
            fft_size,
            node.frequency_bin_count()
        );

        Ok(Self { context, node })
    }

    pub fn context(&self) -> &AudioContext {
        &self.context
    }
}

impl AudioTap for AnalyserTap {
    fn read_time_domain(&mut self, buffer: &mut [u8]) {
        self.node.get_byte_time_domain_data(buffer);
    }
}
