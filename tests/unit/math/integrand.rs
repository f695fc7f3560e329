//! Tests for the charge-density integrand

#[cfg(test)]
mod tests {
    use chargegrid::math::integrand::{alpha, charge_density};
    use chargegrid::math::special::erf;
    use chargegrid::spatial::Pixel;
    use std::f64::consts::PI;

    // Tests alpha_n follows (n + 1/2)·π without truncation
    // Verified by truncating alpha to an integer
    #[test]
    fn test_alpha_is_half_integer_multiple_of_pi() {
        assert!((alpha(0) - PI / 2.0).abs() < 1e-15);
        assert!((alpha(1) - 1.5 * PI).abs() < 1e-15);
        assert!((alpha(10) - 10.5 * PI).abs() < 1e-12);
    }

    // Tests the center pixel at sigma = 1 against a hand-evaluated value
    // Verified by dropping the 0.5·sigma prefactor
    #[test]
    fn test_center_pixel_reference_value() {
        let bounds = Pixel::new(0, 0).bounds();
        let value = charge_density(1.0, &bounds, 0);

        assert!(
            (value - 3.065_788_010_844_031_4).abs() < 1e-12,
            "Unexpected integrand value {value}"
        );
    }

    // Tests the exponent is grouped as (-alpha²)/4 · sigma · sigma
    // Verified by rewriting the exponent as -alpha²/(4·sigma²)
    #[test]
    fn test_exponent_grows_with_sigma() {
        let bounds = Pixel::new(-4, 4).bounds();
        let sigma = 2.0;
        let n = 1;

        let a = alpha(n);
        let expected = (0.5 * sigma)
            * 4.0
            * (-a * a / 4.0 * sigma * sigma).exp()
            * ((erf(-3.0 / sigma) - erf(-5.0 / sigma)) * (erf(5.0 / sigma) - erf(3.0 / sigma)));
        let value = charge_density(sigma, &bounds, n);

        assert!((value - expected).abs() < 1e-24);
        assert!((value - 1.017_718_610_386_386_4e-12).abs() < 1e-20);
    }

    // Tests mirrored pixels give identical integrands
    // Verified by swapping the x_min and x_max terms
    #[test]
    fn test_integrand_symmetric_under_mirroring() {
        for sigma in [0.05, 0.8, 3.0] {
            let left = charge_density(sigma, &Pixel::new(-2, 4).bounds(), 2);
            let right = charge_density(sigma, &Pixel::new(2, 4).bounds(), 2);
            let below = charge_density(sigma, &Pixel::new(-2, -4).bounds(), 2);

            assert!((left - right).abs() <= f64::EPSILON * left.abs());
            assert!((left - below).abs() <= f64::EPSILON * left.abs());
        }
    }

    // Tests sigma = 0 evaluates through IEEE limits rather than being rejected
    // Verified by returning NaN for non-positive sigma
    #[test]
    fn test_zero_sigma_follows_ieee_limits() {
        // erf(±1/0) saturates to ±1 and the 0.5·sigma prefactor zeroes the product
        let value = charge_density(0.0, &Pixel::new(0, 0).bounds(), 0);
        assert!(value.abs() < f64::EPSILON);

        let negative = charge_density(-1.0, &Pixel::new(0, 0).bounds(), 0);
        assert!(negative.is_finite());
    }
}
