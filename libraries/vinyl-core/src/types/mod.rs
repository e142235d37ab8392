//! Domain types shared across Vinyl Player crates

pub mod color;
pub mod raster;
pub mod track;

pub use color::{PresentationColor, Rgb};
pub use raster::RgbaRaster;
pub use track::{Playlist, Track};
