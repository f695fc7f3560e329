//! Pixel geometry for the 5×5 grid

/// Pixel coordinates, boundaries and scan order
pub mod pixel;

pub use pixel::{Pixel, PixelBounds};
