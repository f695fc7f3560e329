//! Tests for the error function and its complement

#[cfg(test)]
mod tests {
    use chargegrid::math::special::{erf, erfc};

    // Tests erf against reference values on both sides of the series/fraction switch
    // Verified by swapping the cutoff so each branch handles the other's range
    #[test]
    fn test_erf_matches_reference_values() {
        let cases = [
            (0.1, 0.112_462_916_018_284_9),
            (0.5, 0.520_499_877_813_046_5),
            (1.0, 0.842_700_792_949_714_9),
            (2.0, 0.995_322_265_018_952_7),
            (2.5, 0.999_593_047_982_555),
            (3.0, 0.999_977_909_503_001_4),
            (4.0, 0.999_999_984_582_742_1),
        ];

        for (x, expected) in cases {
            let value = erf(x);
            assert!(
                (value - expected).abs() < 1e-14,
                "erf({x}) should be {expected}, got {value}"
            );
        }
    }

    // Tests erf is odd and passes through zero
    // Verified by removing the negative-argument reflection
    #[test]
    fn test_erf_is_odd() {
        assert!(erf(0.0).abs() < f64::EPSILON);
        for x in [0.01, 0.7, 1.9, 2.6, 5.5, 40.0] {
            assert!(
                (erf(-x) + erf(x)).abs() < f64::EPSILON,
                "erf(-{x}) should equal -erf({x})"
            );
        }
    }

    // Tests large arguments saturate at exactly one
    // Verified by lowering the saturation threshold below 6
    #[test]
    fn test_erf_saturates_for_large_arguments() {
        assert!((erf(6.0) - 1.0).abs() < f64::EPSILON);
        assert!((erf(500.0) - 1.0).abs() < f64::EPSILON);
        assert!((erf(f64::INFINITY) - 1.0).abs() < f64::EPSILON);
        assert!((erf(-500.0) + 1.0).abs() < f64::EPSILON);
    }

    // Tests NaN propagates instead of being clamped
    // Verified by returning 0.0 for NaN input
    #[test]
    fn test_erf_propagates_nan() {
        assert!(erf(f64::NAN).is_nan());
    }

    // Tests erfc keeps relative precision in the tail
    // Verified by computing erfc as 1 - erf for every argument
    #[test]
    fn test_erfc_tail_precision() {
        let cases = [
            (3.0, 2.209_049_699_858_544e-5),
            (5.0, 1.537_459_794_428_035e-12),
            (10.0, 2.088_487_583_762_545e-45),
        ];

        for (x, expected) in cases {
            let value = erfc(x);
            assert!(
                ((value - expected) / expected).abs() < 1e-12,
                "erfc({x}) should be {expected}, got {value}"
            );
        }

        assert!((erfc(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((erfc(-1.0) - 1.842_700_792_949_715).abs() < 1e-14);
    }
}
