//! Browser bindings for vinyl-playback
//!
//! Adapters that back the `vinyl_core` capability traits with DOM and Web
//! Audio objects, plus [`WasmPlayer`], the JavaScript-facing widget.

mod artwork;
mod canvas;
mod config;
mod media;
mod player;
mod scheduler;
mod storage;

pub use artwork::{HtmlArtwork, ImageArtworkLoader};
pub use canvas::CanvasSurface;
pub use config::PlayerConfig;
pub use media::{AnalyserTap, HtmlMediaSource};
pub use player::WasmPlayer;
pub use scheduler::AnimationFrameScheduler;
pub use storage::LocalStorageStore;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

/// Readable text for a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn window() -> vinyl_core::Result<Window> {
    web_sys::window().ok_or_else(|| vinyl_core::VinylError::media("no window"))
}

pub(crate) fn document() -> vinyl_core::Result<Document> {
    window()?
        .document()
        .ok_or_else(|| vinyl_core::VinylError::media("no document"))
}

/// Look up `id` and cast it to the expected element type
pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> vinyl_core::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| vinyl_core::VinylError::invalid_config(format!("no element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| vinyl_core::VinylError::invalid_config(format!("#{} has the wrong type", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinyl_core::{ArtworkImage, ArtworkLoader, AudioTap, KeyValueStore, MediaSource, RenderSurface};

    fn media<T: MediaSource>() {}
    fn tap<T: AudioTap>() {}
    fn store<T: KeyValueStore>() {}
    fn surface<T: RenderSurface>() {}
    fn loader<T: ArtworkLoader>() {}
    fn image<T: ArtworkImage>() {}

    #[test]
    fn adapters_cover_every_capability() {
        media::<HtmlMediaSource>();
        tap::<AnalyserTap>();
        store::<LocalStorageStore>();
        surface::<CanvasSurface>();
        loader::<ImageArtworkLoader>();
        image::<HtmlArtwork>();
    }
}
