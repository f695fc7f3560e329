//! Truncated series expansion of the pixel charge
//!
//! Each pixel's value is Σₙ wₙ · ∫ f(σ, pixel, n) dσ for n = 0..=N, evaluated
//! separately under every quadrature rule.

use num_traits::ToPrimitive;
use tracing::debug;

use crate::io::configuration::{Q_0, Z_0};
use crate::math::integrand::{alpha, charge_density};
use crate::math::quadrature::{ByRule, Partition, QuadratureRule};
use crate::spatial::pixel::PixelBounds;

/// Which series terms contribute to a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    /// Sum every term n = 0..=limit
    Summed {
        /// Highest series index included
        limit: u32,
    },
    /// Evaluate a single term without summation
    SingleTerm {
        /// Series index to evaluate
        index: u32,
    },
}

impl SeriesMode {
    /// Series indices visited in this mode, in evaluation order
    pub fn indices(self) -> std::ops::RangeInclusive<u32> {
        match self {
            Self::Summed { limit } => 0..=limit,
            Self::SingleTerm { index } => index..=index,
        }
    }
}

/// alpha_n truncated toward zero to an integer
///
/// The weight deliberately uses this integer rather than the exact
/// (n + 1/2)·π, which shifts every term of the series. Saturates at
/// `i32::MAX` for indices whose alpha no longer fits.
pub fn truncated_alpha(n: u32) -> i32 {
    alpha(n).to_i32().unwrap_or(i32::MAX)
}

/// Weight wₙ = (Q₀/2) · 1/4 · αₙ · sin(αₙ · z₀) using the truncated alpha
pub fn series_weight(n: u32) -> f64 {
    let alpha_n_i = f64::from(truncated_alpha(n));
    (Q_0 / 2.0) * 0.25 * alpha_n_i * (alpha_n_i * Z_0).sin()
}

/// Weighted integral of a single series term under one rule
pub fn weighted_term(
    rule: QuadratureRule,
    partition: &Partition,
    bounds: &PixelBounds,
    n: u32,
) -> f64 {
    series_weight(n) * rule.integrate(partition, |sigma| charge_density(sigma, bounds, n))
}

/// Series value of one pixel under every rule
pub fn pixel_sums(partition: &Partition, bounds: &PixelBounds, mode: SeriesMode) -> ByRule<f64> {
    let mut sums = ByRule::<f64>::default();

    for n in mode.indices() {
        for rule in QuadratureRule::ALL {
            let term = weighted_term(rule, partition, bounds, n);
            *sums.get_mut(rule) += term;
        }
        debug!(
            n,
            midpoint = sums.midpoint,
            trapezoidal = sums.trapezoidal,
            simpson = sums.simpson,
            "Accumulated series term"
        );
    }

    sums
}
