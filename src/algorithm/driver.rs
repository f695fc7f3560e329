//! Pixel-by-pixel evaluation of the charge series over the whole grid

use ndarray::Array2;
use tracing::info;

use crate::algorithm::series::{SeriesMode, pixel_sums};
use crate::io::configuration::GRID_SIDE;
use crate::io::error::Result;
use crate::math::quadrature::{ByRule, Partition};
use crate::spatial::pixel::{Pixel, PixelBounds, scan_order};

/// One 5×5 grid of pixel values per quadrature rule
///
/// Row 0 is the top row (y = +4) and column 0 the leftmost column (x = -4),
/// so the standard iteration order of each array is the scan order.
pub type ChargeGrids = ByRule<Array2<f64>>;

/// Everything the driver needs to evaluate the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Integration interval for sigma and its subdivision
    pub partition: Partition,
    /// Which series terms contribute to each pixel
    pub mode: SeriesMode,
}

/// Receives per-pixel notifications while the grid is evaluated
pub trait PixelObserver {
    /// Called before a pixel's series is evaluated
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails to record the event
    fn pixel_started(&mut self, pixel: Pixel, bounds: &PixelBounds) -> Result<()>;

    /// Called with the pixel's raw series values under every rule
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails to record the event
    fn pixel_finished(&mut self, pixel: Pixel, sums: &ByRule<f64>) -> Result<()>;
}

/// Observer that ignores every event
impl PixelObserver for () {
    fn pixel_started(&mut self, _pixel: Pixel, _bounds: &PixelBounds) -> Result<()> {
        Ok(())
    }

    fn pixel_finished(&mut self, _pixel: Pixel, _sums: &ByRule<f64>) -> Result<()> {
        Ok(())
    }
}

/// Evaluate every pixel in scan order and collect the raw series values
///
/// # Errors
///
/// Returns an error only if the observer fails
pub fn evaluate_grid<O>(config: &GridConfig, observer: &mut O) -> Result<ChargeGrids>
where
    O: PixelObserver + ?Sized,
{
    let mut grids = ByRule::from_fn(|_| Array2::<f64>::zeros((GRID_SIDE, GRID_SIDE)));

    for pixel in scan_order() {
        let bounds = pixel.bounds();
        observer.pixel_started(pixel, &bounds)?;

        let sums = pixel_sums(&config.partition, &bounds, config.mode);
        let index = pixel.grid_index();
        for (rule, value) in sums.iter() {
            if let Some(cell) = grids.get_mut(rule).get_mut(index) {
                *cell = *value;
            }
        }

        info!(
            x = pixel.x,
            y = pixel.y,
            midpoint = sums.midpoint,
            trapezoidal = sums.trapezoidal,
            simpson = sums.simpson,
            "Pixel evaluated"
        );
        observer.pixel_finished(pixel, &sums)?;
    }

    Ok(grids)
}
