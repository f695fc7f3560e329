use std::f64::consts::PI;

use crate::math::special::erf;
use crate::spatial::pixel::PixelBounds;

/// Series eigenvalue alpha_n = (n + 1/2)·π
pub fn alpha(n: u32) -> f64 {
    (f64::from(n) + 0.5) * PI
}

/// Charge-density integrand for one pixel and one series term
///
/// Combines the Gaussian-like decay of the n-th series mode with the
/// fraction of a spread charge falling inside the pixel along each axis:
///
/// f = 0.5·σ · 4 · exp(-α²/4 · σ · σ) · (erf(B/σ) - erf(A/σ)) · (erf(E/σ) - erf(C/σ))
///
/// The exponent is grouped left to right as `(-α²) / 4 · σ · σ`, i.e. the
/// decay grows with σ. No guards are applied: σ = 0 yields NaN.
pub fn charge_density(sigma: f64, bounds: &PixelBounds, n: u32) -> f64 {
    let alpha_n = alpha(n);

    let exponent = -alpha_n.powi(2) / 4.0 * sigma * sigma;
    let x_fraction = erf(f64::from(bounds.x_max) / sigma) - erf(f64::from(bounds.x_min) / sigma);
    let y_fraction = erf(f64::from(bounds.y_max) / sigma) - erf(f64::from(bounds.y_min) / sigma);

    (0.5 * sigma) * 4.0 * exponent.exp() * (x_fraction * y_fraction)
}
