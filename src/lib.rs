//! Charge distribution on a 5×5 pixel grid by series expansion and fixed-step quadrature
//!
//! Every pixel's charge is a truncated series over n whose terms are integrals
//! over the spread parameter sigma. Each integral is approximated three ways
//! (midpoint, trapezoidal and Simpson's rule), the grids are normalized to
//! their center pixel and written to a flat results file.

#![forbid(unsafe_code)]

/// Series accumulation, grid driver and center-pixel normalization
pub mod algorithm;
/// Command line, console prompts, reporting and error handling
pub mod io;
/// Error function, integrand and quadrature rules
pub mod math;
/// Pixel geometry and grid scan order
pub mod spatial;

pub use io::error::{ChargeGridError, Result};
