//! Colors and the shared presentation color handle

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Gold accent used before any album art has been sampled
    pub const GOLD: Rgb = Rgb::new(212, 175, 55);

    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(12,34,56)`
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::GOLD
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Shared handle to the color derived from the current album art
///
/// Cloning shares the same cell: the controller publishes, renderers and
/// themed chrome read. Single-threaded by construction (`Rc`).
#[derive(Debug, Clone, Default)]
pub struct PresentationColor {
    inner: Rc<Cell<Rgb>>,
}

impl PresentationColor {
    /// Create a handle holding `initial`
    pub fn new(initial: Rgb) -> Self {
        Self {
            inner: Rc::new(Cell::new(initial)),
        }
    }

    /// Current color
    pub fn get(&self) -> Rgb {
        self.inner.get()
    }

    /// Replace the color (full recompute, no blending)
    pub fn set(&self, color: Rgb) {
        self.inner.set(color);
    }
}
