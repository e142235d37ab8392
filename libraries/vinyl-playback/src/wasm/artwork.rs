//! Album cover adapters

use super::{describe, document};
use wasm_bindgen::JsCast;
use vinyl_core::{ArtworkImage, ArtworkLoader, Result, RgbaRaster, VinylError};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// [`ArtworkLoader`] that points the cover `<img>` at each track's art
///
/// The host listens for the image's `load` event and hands an
/// [`HtmlArtwork`] to the controller.
#[derive(Debug, Clone)]
pub struct ImageArtworkLoader {
    image: HtmlImageElement,
}

impl ImageArtworkLoader {
    pub fn new(image: HtmlImageElement) -> Self {
        // Cross-origin covers need CORS or the canvas read-back is blocked
        image.set_cross_origin(Some("anonymous"));
        Self { image }
    }

    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }
}

impl ArtworkLoader for ImageArtworkLoader {
    fn load(&mut self, locator: &str) -> Result<()> {
        self.image.set_src(locator);
        Ok(())
    }
}

/// A loaded `<img>`, rasterized through an off-screen canvas
#[derive(Debug, Clone)]
pub struct HtmlArtwork {
    image: HtmlImageElement,
}

impl HtmlArtwork {
    pub fn new(image: HtmlImageElement) -> Self {
        Self { image }
    }
}

impl ArtworkImage for HtmlArtwork {
    fn is_ready(&self) -> bool {
        self.image.complete()
    }

    fn rasterize(&self) -> Result<RgbaRaster> {
        let width = self.image.natural_width();
        let height = self.image.natural_height();
        if width == 0 || height == 0 {
            // Broken or empty image; nothing to sample
            return RgbaRaster::new(width, height, Vec::new());
        }

        let image_error = |e: wasm_bindgen::JsValue| VinylError::image(describe(&e));

        let canvas = document()?
            .create_element("canvas")
            .map_err(image_error)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| VinylError::image("created element is not a canvas"))?;
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")
            .map_err(image_error)?
            .ok_or_else(|| VinylError::image("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| VinylError::image("unexpected 2d context type"))?;

        context
            .draw_image_with_html_image_element(&self.image, 0.0, 0.0)
            .map_err(image_error)?;

        // Throws SecurityError when the image tainted the canvas
        let pixels = context
            .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))
            .map_err(image_error)?;

        RgbaRaster::new(width, height, pixels.data().0)
    }
}
