//! Physical constants, grid geometry and runtime defaults

// Grid geometry
/// Largest pixel-center coordinate on either axis (grid spans -4..=4)
pub const GRID_HALF_EXTENT: i32 = 4;
/// Distance between neighbouring pixel centers (each pixel is 2 units wide)
pub const PIXEL_PITCH: i32 = 2;
/// Number of pixels along one side of the grid
pub const GRID_SIDE: usize = 5;
/// Total number of pixels in the grid
pub const PIXEL_COUNT: usize = GRID_SIDE * GRID_SIDE;
/// Flat row-major index of the center pixel
pub const CENTER_INDEX: usize = 12;

// Series constants
/// Total charge scale factor
pub const Q_0: f64 = 1.0;
/// Depth of the charge below the pixel plane
pub const Z_0: f64 = 1.0;

// Output settings
/// Default name of the results file written to the working directory
pub const OUTPUT_FILE_NAME: &str = "Integral_Results.txt";
/// Significant digits used when rendering values (matches default stream output)
pub const DISPLAY_PRECISION: usize = 6;
/// Width of the pixel progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
