//! Progress display for grid evaluation, used in place of the per-pixel echo

use crate::algorithm::driver::PixelObserver;
use crate::io::configuration::{PIXEL_COUNT, PROGRESS_BAR_WIDTH};
use crate::io::error::Result;
use crate::math::quadrature::ByRule;
use crate::spatial::pixel::{Pixel, PixelBounds};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PIXEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Pixels: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many of the grid's pixels have been evaluated
pub struct PixelProgress {
    bar: ProgressBar,
}

impl Default for PixelProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelProgress {
    /// Create a progress bar sized to the whole grid
    pub fn new() -> Self {
        let bar = ProgressBar::new(PIXEL_COUNT as u64);
        bar.set_style(PIXEL_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Number of pixels completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once evaluation is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl PixelObserver for PixelProgress {
    fn pixel_started(&mut self, pixel: Pixel, _bounds: &PixelBounds) -> Result<()> {
        self.bar.set_message(format!("({}, {})", pixel.x, pixel.y));
        Ok(())
    }

    fn pixel_finished(&mut self, _pixel: Pixel, _sums: &ByRule<f64>) -> Result<()> {
        self.bar.inc(1);
        Ok(())
    }
}
