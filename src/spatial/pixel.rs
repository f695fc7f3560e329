//! Pixel coordinates, boundaries and the grid scan order
//!
//! Pixels are 2-unit cells centered on even coordinates in -4..=4. The grid is
//! scanned row-major from the top-left pixel: y descends from +4 to -4 and,
//! within each row, x ascends from -4 to +4.

use crate::io::configuration::{GRID_HALF_EXTENT, GRID_SIDE, PIXEL_PITCH};

/// Center coordinates of one pixel on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Horizontal center coordinate
    pub x: i32,
    /// Vertical center coordinate
    pub y: i32,
}

/// Boundaries of a pixel along both axes
///
/// Named A, B (x extent) and C, E (y extent) in console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelBounds {
    /// Left edge (A)
    pub x_min: i32,
    /// Right edge (B)
    pub x_max: i32,
    /// Bottom edge (C)
    pub y_min: i32,
    /// Top edge (E)
    pub y_max: i32,
}

impl Pixel {
    /// Create a pixel from its center coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Edges one unit either side of the center
    pub const fn bounds(self) -> PixelBounds {
        PixelBounds {
            x_min: self.x - 1,
            x_max: self.x + 1,
            y_min: self.y - 1,
            y_max: self.y + 1,
        }
    }

    /// Row and column of this pixel in a top-left-origin grid
    pub const fn grid_index(self) -> [usize; 2] {
        let row = (GRID_HALF_EXTENT - self.y) / PIXEL_PITCH;
        let col = (self.x + GRID_HALF_EXTENT) / PIXEL_PITCH;
        [row as usize, col as usize]
    }

    /// Flat row-major index of this pixel
    pub const fn flat_index(self) -> usize {
        let [row, col] = self.grid_index();
        row * GRID_SIDE + col
    }
}

impl PixelBounds {
    /// Bounds as the (A, B, C, E) quadruple
    pub const fn as_tuple(self) -> (i32, i32, i32, i32) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

/// Row coordinates from top to bottom
pub fn row_coordinates() -> impl Iterator<Item = i32> {
    (-GRID_HALF_EXTENT..=GRID_HALF_EXTENT)
        .rev()
        .step_by(PIXEL_PITCH as usize)
}

/// Column coordinates from left to right
pub fn column_coordinates() -> impl Iterator<Item = i32> {
    (-GRID_HALF_EXTENT..=GRID_HALF_EXTENT).step_by(PIXEL_PITCH as usize)
}

/// Every pixel in scan order: top row first, left to right within a row
pub fn scan_order() -> impl Iterator<Item = Pixel> {
    row_coordinates().flat_map(|y| column_coordinates().map(move |x| Pixel::new(x, y)))
}
