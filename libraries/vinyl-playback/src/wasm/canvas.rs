//! 2D canvas adapter

use super::describe;
use wasm_bindgen::JsCast;
use vinyl_core::{RenderSurface, Result, Rgb, VinylError};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`RenderSurface`] over a `<canvas>` 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| VinylError::media(describe(&e)))?
            .ok_or_else(|| VinylError::media("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| VinylError::media("unexpected 2d context type"))?;

        Ok(Self { canvas, context })
    }

    /// Set the drawing buffer size in pixels
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl RenderSurface for CanvasSurface {
    fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.context.set_stroke_style_str(&color.to_css());
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }
}
