//! Tests for grid evaluation order, storage and observer notifications

#[cfg(test)]
mod tests {
    use chargegrid::Result;
    use chargegrid::algorithm::driver::{GridConfig, PixelObserver, evaluate_grid};
    use chargegrid::algorithm::series::{SeriesMode, pixel_sums};
    use chargegrid::math::quadrature::{ByRule, Partition};
    use chargegrid::spatial::pixel::scan_order;
    use chargegrid::spatial::{Pixel, PixelBounds};

    #[derive(Default)]
    struct Recorder {
        started: Vec<(Pixel, PixelBounds)>,
        finished: Vec<(Pixel, ByRule<f64>)>,
    }

    impl PixelObserver for Recorder {
        fn pixel_started(&mut self, pixel: Pixel, bounds: &PixelBounds) -> Result<()> {
            self.started.push((pixel, *bounds));
            Ok(())
        }

        fn pixel_finished(&mut self, pixel: Pixel, sums: &ByRule<f64>) -> Result<()> {
            self.finished.push((pixel, *sums));
            Ok(())
        }
    }

    fn small_config() -> GridConfig {
        GridConfig {
            partition: Partition::new(0.5, 4.0, 10),
            mode: SeriesMode::Summed { limit: 1 },
        }
    }

    // Tests observers see every pixel once, in scan order, with matching bounds
    // Verified by notifying after storing only every other pixel
    #[test]
    fn test_observer_sees_scan_order() {
        let mut recorder = Recorder::default();
        evaluate_grid(&small_config(), &mut recorder).expect("Evaluation should succeed");

        let expected: Vec<Pixel> = scan_order().collect();
        let started: Vec<Pixel> = recorder.started.iter().map(|(p, _)| *p).collect();
        let finished: Vec<Pixel> = recorder.finished.iter().map(|(p, _)| *p).collect();

        assert_eq!(started, expected);
        assert_eq!(finished, expected);
        for (pixel, bounds) in &recorder.started {
            assert_eq!(*bounds, pixel.bounds());
        }
    }

    // Tests every grid cell holds the series value of its pixel
    // Verified by storing values transposed
    #[test]
    fn test_grid_cells_hold_pixel_sums() {
        let config = small_config();
        let grids = evaluate_grid(&config, &mut ()).expect("Evaluation should succeed");

        for pixel in scan_order() {
            let expected = pixel_sums(&config.partition, &pixel.bounds(), config.mode);
            for (rule, value) in expected.iter() {
                let stored = grids
                    .get(rule)
                    .get(pixel.grid_index())
                    .copied()
                    .expect("Pixel should be inside the grid");
                assert!(
                    (stored - value).abs() <= f64::EPSILON * value.abs(),
                    "{rule} value at ({}, {}) was not stored",
                    pixel.x,
                    pixel.y
                );
            }
        }

        assert!((grids.midpoint[[0, 0]] - 9.130_38e-5).abs() < 1e-9);
    }

    // Tests the grid is symmetric about both axes
    // Verified by shifting pixel bounds by one unit
    #[test]
    fn test_grid_is_symmetric() {
        let grids = evaluate_grid(&small_config(), &mut ()).expect("Evaluation should succeed");

        for (_, grid) in grids.iter() {
            for row in 0..5 {
                for col in 0..5 {
                    let value = grid[[row, col]];
                    let tolerance = 1e-14 * value.abs();
                    assert!((value - grid[[row, 4 - col]]).abs() <= tolerance);
                    assert!((value - grid[[4 - row, col]]).abs() <= tolerance);
                    assert!((value - grid[[col, row]]).abs() <= tolerance);
                }
            }
        }
    }

    // Tests the center pixel dominates its neighbours
    // Verified by inverting the pixel bounds
    #[test]
    fn test_center_pixel_is_largest() {
        let grids = evaluate_grid(&small_config(), &mut ()).expect("Evaluation should succeed");

        let center = grids.simpson[[2, 2]];
        assert!(grids.simpson.iter().all(|v| *v <= center));
        assert!(grids.simpson[[2, 1]] < center);
        assert!(grids.simpson[[0, 0]] < grids.simpson[[1, 1]]);
    }
}
