//! Album-art color extraction
//!
//! Averages a strided subset of the pixels in the decoded cover image. The
//! stride bounds the cost on large images: with the default stride of 10
//! pixels the loop steps 40 bytes through the RGBA buffer.

use tracing::debug;
use vinyl_core::{ArtworkImage, PresentationColor, Result, Rgb, RgbaRaster};

/// Bytes per RGBA pixel
const BYTES_PER_PIXEL: usize = 4;

/// Default pixel stride between samples
const DEFAULT_PIXEL_STRIDE: usize = 10;

/// Integer-truncated mean color of every `pixel_stride`-th pixel
///
/// Alpha is ignored. Returns `None` for an empty raster.
pub fn average_color(raster: &RgbaRaster, pixel_stride: usize) -> Option<Rgb> {
    let (mut r, mut g, mut b, mut count) = (0u64, 0u64, 0u64, 0u64);
    for pixel in raster
        .data()
        .chunks_exact(BYTES_PER_PIXEL)
        .step_by(pixel_stride.max(1))
    {
        r += u64::from(pixel[0]);
        g += u64::from(pixel[1]);
        b += u64::from(pixel[2]);
        count += 1;
    }

    if count == 0 {
        return None;
    }

    Some(Rgb::new(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
    ))
}

/// Derives the presentation color from album art
#[derive(Debug, Clone)]
pub struct ColorExtractor {
    pixel_stride: usize,
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PIXEL_STRIDE)
    }
}

impl ColorExtractor {
    /// Create an extractor sampling one pixel out of every `pixel_stride`
    pub fn new(pixel_stride: usize) -> Self {
        Self {
            pixel_stride: pixel_stride.max(1),
        }
    }

    pub fn pixel_stride(&self) -> usize {
        self.pixel_stride
    }

    /// Average color of `image`
    ///
    /// Returns `Ok(None)` without touching the image when it has not finished
    /// loading, or when it has no pixels.
    pub fn extract(&self, image: &dyn ArtworkImage) -> Result<Option<Rgb>> {
        if !image.is_ready() {
            debug!("Artwork not ready, skipping color extraction");
            return Ok(None);
        }

        let raster = image.rasterize()?;
        let color = average_color(&raster, self.pixel_stride);
        debug!(
            "Extracted {:?} from {}x{} artwork",
            color,
            raster.width(),
            raster.height()
        );
        Ok(color)
    }

    /// Extract and publish to `target`
    ///
    /// Returns the published color, or `None` if extraction was skipped (the
    /// previous color stays in place).
    pub fn publish(
        &self,
        image: &dyn ArtworkImage,
        target: &PresentationColor,
    ) -> Result<Option<Rgb>> {
        let color = self.extract(image)?;
        if let Some(color) = color {
            target.set(color);
        }
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinyl_core::VinylError;

    struct PendingImage;

    impl ArtworkImage for PendingImage {
        fn is_ready(&self) -> bool {
            false
        }

        fn rasterize(&self) -> Result<RgbaRaster> {
            panic!("rasterize called on an image that is still loading");
        }
    }

    struct BrokenImage;

    impl ArtworkImage for BrokenImage {
        fn is_ready(&self) -> bool {
            true
        }

        fn rasterize(&self) -> Result<RgbaRaster> {
            Err(VinylError::image("tainted canvas"))
        }
    }

    #[test]
    fn samples_every_tenth_pixel() {
        // 20 pixels: samples land on pixels 0 and 10 only
        let mut data = vec![0u8; 20 * 4];
        data[0..4].copy_from_slice(&[100, 0, 50, 255]);
        data[40..44].copy_from_slice(&[201, 30, 51, 255]);
        // Unsampled neighbours must not leak into the mean
        data[4..8].copy_from_slice(&[255, 255, 255, 255]);
        let raster = RgbaRaster::new(20, 1, data).unwrap();

        assert_eq!(average_color(&raster, 10), Some(Rgb::new(150, 15, 50)));
    }

    #[test]
    fn mean_is_truncated_not_rounded() {
        let mut data = vec![0u8; 2 * 4];
        data[0..4].copy_from_slice(&[1, 1, 1, 255]);
        data[4..8].copy_from_slice(&[2, 2, 2, 255]);
        let raster = RgbaRaster::new(2, 1, data).unwrap();

        assert_eq!(average_color(&raster, 1), Some(Rgb::new(1, 1, 1)));
    }

    #[test]
    fn alpha_is_ignored() {
        let raster = RgbaRaster::new(1, 1, vec![10, 20, 30, 0]).unwrap();
        assert_eq!(average_color(&raster, 10), Some(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn empty_raster_has_no_color() {
        let raster = RgbaRaster::new(0, 0, Vec::new()).unwrap();
        assert_eq!(average_color(&raster, 10), None);
    }

    #[test]
    fn pending_image_is_skipped_and_color_kept() {
        let color = PresentationColor::new(Rgb::new(1, 2, 3));
        let published = ColorExtractor::default()
            .publish(&PendingImage, &color)
            .unwrap();

        assert_eq!(published, None);
        assert_eq!(color.get(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn rasterize_failure_propagates() {
        let color = PresentationColor::default();
        let result = ColorExtractor::default().publish(&BrokenImage, &color);
        assert!(matches!(result, Err(VinylError::Image(_))));
        assert_eq!(color.get(), Rgb::GOLD);
    }

    #[test]
    fn zero_stride_is_clamped() {
        assert_eq!(ColorExtractor::new(0).pixel_stride(), 1);
    }
}
