//! Center-pixel normalization of the evaluated grids

use ndarray::Array2;

use crate::algorithm::driver::ChargeGrids;
use crate::io::configuration::{CENTER_INDEX, GRID_SIDE};
use crate::math::quadrature::ByRule;

/// Grids rescaled to their center pixel, with the original center values kept
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGrids {
    /// Pre-normalization value of the center pixel under every rule
    pub centers: ByRule<f64>,
    /// Relative intensity grids (center pixel equals 1)
    pub grids: ChargeGrids,
}

/// Value of the center pixel (flat index 12)
pub fn center_value(grid: &Array2<f64>) -> f64 {
    grid.get([CENTER_INDEX / GRID_SIDE, CENTER_INDEX % GRID_SIDE])
        .copied()
        .unwrap_or(f64::NAN)
}

/// Multiply every element by the reciprocal of `center`, in place
///
/// A zero or non-finite center is not guarded against and yields ∞/NaN.
pub fn rescale(grid: &mut Array2<f64>, center: f64) {
    let factor = 1.0 / center;
    grid.mapv_inplace(|value| value * factor);
}

/// Snapshot each grid's center pixel and rescale the grid by it
pub fn normalize(mut grids: ChargeGrids) -> NormalizedGrids {
    let centers = ByRule::from_fn(|rule| center_value(grids.get(rule)));

    for (rule, center) in centers.iter() {
        rescale(grids.get_mut(rule), *center);
    }

    NormalizedGrids { centers, grids }
}
