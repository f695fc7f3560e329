//! Numerical building blocks for the charge integrals

/// Charge-density integrand for a single pixel and series term
pub mod integrand;
/// Fixed-step composite quadrature rules
pub mod quadrature;
/// Error function and its complement
pub mod special;
