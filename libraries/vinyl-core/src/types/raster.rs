//! Decoded RGBA pixel buffers

use crate::error::{Result, VinylError};
use crate::traits::ArtworkImage;

/// Row-major RGBA pixels at native image dimensions (4 bytes per pixel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaRaster {
    /// Wrap a pixel buffer
    ///
    /// # Errors
    /// Returns `VinylError::Image` if `data.len() != width * height * 4` or
    /// that size does not fit in memory
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                VinylError::image(format!("{}x{} raster is too large", width, height))
            })?;
        if data.len() != expected {
            return Err(VinylError::image(format!(
                "{}x{} raster needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raster filled with one opaque color
    pub fn solid(width: u32, height: u32, r: u8, g: u8, b: u8) -> Self {
        let pixels = width as usize * height as usize;
        let data = [r, g, b, 255].repeat(pixels);
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// An already-decoded raster is always ready
impl ArtworkImage for RgbaRaster {
    fn is_ready(&self) -> bool {
        true
    }

    fn rasterize(&self) -> Result<RgbaRaster> {
        Ok(self.clone())
    }
}
