//! Command-line interface and the end-to-end run sequence

use crate::algorithm::driver::{ChargeGrids, GridConfig, evaluate_grid};
use crate::algorithm::normalization::{NormalizedGrids, normalize};
use crate::algorithm::series::SeriesMode;
use crate::io::configuration::OUTPUT_FILE_NAME;
use crate::io::error::Result;
use crate::io::progress::PixelProgress;
use crate::io::prompt::{
    COUNT_PROMPT, ConsolePrompt, LIMIT_PROMPT, LOWER_LIMIT_PROMPT, UPPER_LIMIT_PROMPT,
};
use crate::io::report::{ConsoleTranscript, save_results, write_center_summary};
use crate::math::quadrature::Partition;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "chargegrid")]
#[command(version, about = "Integrate the charge-density series over a 5x5 pixel grid")]
/// Command-line arguments; any missing scalar is asked for on the console
pub struct Cli {
    /// Lower integration limit for sigma
    #[arg(long, allow_negative_numbers = true)]
    pub lower: Option<f64>,

    /// Upper integration limit for sigma
    #[arg(long, allow_negative_numbers = true)]
    pub upper: Option<f64>,

    /// Number of subintervals used by every quadrature rule
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Highest series index included in the summation
    #[arg(short, long, conflicts_with = "single_term")]
    pub limit: Option<u32>,

    /// Evaluate only this series index instead of summing
    #[arg(short, long, value_name = "INDEX")]
    pub single_term: Option<u32>,

    /// Results file, overwritten on every run
    #[arg(short, long, default_value = OUTPUT_FILE_NAME)]
    pub output: PathBuf,

    /// Show a progress bar instead of echoing every pixel
    #[arg(short, long)]
    pub progress: bool,

    /// Wait for one more line of input before exiting
    #[arg(long)]
    pub pause: bool,
}

impl Cli {
    /// Check if the per-pixel transcript should be printed
    pub const fn echo_pixels(&self) -> bool {
        !self.progress
    }
}

/// Fully resolved run parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParameters {
    /// Lower integration limit
    pub lower: f64,
    /// Upper integration limit
    pub upper: f64,
    /// Number of subintervals
    pub count: usize,
    /// Series terms to evaluate
    pub mode: SeriesMode,
}

impl RunParameters {
    /// Driver configuration for these parameters
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            partition: Partition::new(self.lower, self.upper, self.count),
            mode: self.mode,
        }
    }
}

/// Runs one grid evaluation from parameter entry to the results file
pub struct GridRunner<R, W> {
    cli: Cli,
    console: ConsolePrompt<R, W>,
}

impl<R: BufRead, W: Write> GridRunner<R, W> {
    /// Create a runner reading from `input` and writing to `output`
    pub const fn new(cli: Cli, input: R, output: W) -> Self {
        Self {
            cli,
            console: ConsolePrompt::new(input, output),
        }
    }

    /// Resolve parameters, evaluate, normalize, report and save
    ///
    /// # Errors
    ///
    /// Returns an error if parameter entry fails or the console cannot be
    /// written to. An unwritable results file is reported, not returned.
    pub fn run(&mut self) -> Result<NormalizedGrids> {
        let parameters = self.resolve_parameters()?;
        info!(?parameters, "Starting grid evaluation");

        let start_time = Instant::now();
        let grids = self.evaluate(&parameters)?;
        let normalized = normalize(grids);
        info!(elapsed = ?start_time.elapsed(), "Grid evaluation finished");

        write_center_summary(self.console.output_mut(), &normalized)?;
        save_results(&self.cli.output, &normalized.grids, self.console.output_mut())?;

        if self.cli.pause {
            self.console.pause()?;
        }

        Ok(normalized)
    }

    /// Take each scalar from the command line or, failing that, the console
    ///
    /// # Errors
    ///
    /// Returns an error if a prompted value is missing or malformed
    pub fn resolve_parameters(&mut self) -> Result<RunParameters> {
        let lower = self.console.ask_unless(self.cli.lower, LOWER_LIMIT_PROMPT)?;
        let upper = self.console.ask_unless(self.cli.upper, UPPER_LIMIT_PROMPT)?;
        let count = self.console.ask_unless(self.cli.count, COUNT_PROMPT)?;
        let mode = match self.cli.single_term {
            Some(index) => SeriesMode::SingleTerm { index },
            None => SeriesMode::Summed {
                limit: self.console.ask_unless(self.cli.limit, LIMIT_PROMPT)?,
            },
        };

        Ok(RunParameters {
            lower,
            upper,
            count,
            mode,
        })
    }

    fn evaluate(&mut self, parameters: &RunParameters) -> Result<ChargeGrids> {
        let config = parameters.grid_config();

        if self.cli.echo_pixels() {
            let mut transcript = ConsoleTranscript::new(self.console.output_mut());
            evaluate_grid(&config, &mut transcript)
        } else {
            let mut progress = PixelProgress::new();
            let grids = evaluate_grid(&config, &mut progress)?;
            progress.finish();
            Ok(grids)
        }
    }
}
