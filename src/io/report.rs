//! Console transcript and the flat results file
//!
//! Numbers are rendered the way a default-configured C++ output stream would
//! render a `double`, so that the results file stays byte-compatible with
//! earlier runs of the tool.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array2;
use tracing::{info, warn};

use crate::algorithm::driver::{ChargeGrids, PixelObserver};
use crate::algorithm::normalization::NormalizedGrids;
use crate::io::configuration::{DISPLAY_PRECISION, PIXEL_COUNT};
use crate::io::error::{Result, console_error, file_system_error};
use crate::math::quadrature::{ByRule, QuadratureRule};
use crate::spatial::pixel::{Pixel, PixelBounds};

/// Render `value` like `printf("%.{precision}g")`
///
/// Chooses fixed or scientific notation from the decimal exponent after
/// rounding, then strips trailing zeros. Non-finite values print as `inf`,
/// `-inf`, `nan` or `-nan`.
pub fn format_general(value: f64, precision: usize) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_nan() {
        return format!("{sign}nan");
    }
    if value.is_infinite() {
        return format!("{sign}inf");
    }
    if value == 0.0 {
        return format!("{sign}0");
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{exponent_sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Render a value with the default display precision
pub fn display(value: f64) -> String {
    format_general(value, DISPLAY_PRECISION)
}

/// Array-name suffix used in the results file
pub const fn array_suffix(rule: QuadratureRule) -> &'static str {
    match rule {
        QuadratureRule::Midpoint => "Mid",
        QuadratureRule::Trapezoidal => "Trap",
        QuadratureRule::Simpson => "Simp",
    }
}

/// Capitalized rule name used in the center-pixel summary
pub const fn rule_title(rule: QuadratureRule) -> &'static str {
    match rule {
        QuadratureRule::Midpoint => "Midpoint",
        QuadratureRule::Trapezoidal => "Trapezoidal",
        QuadratureRule::Simpson => "Simpson's",
    }
}

/// One line of the results file: `double resultArrMid[25] = {v0, ..., v24,  };`
pub fn results_line(rule: QuadratureRule, grid: &Array2<f64>) -> String {
    let mut line = format!("double resultArr{}[{PIXEL_COUNT}] = {{", array_suffix(rule));
    for value in grid {
        line.push_str(&display(*value));
        line.push_str(", ");
    }
    line.push_str(" };\n");
    line
}

/// Write all three results lines to `writer`
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_results<W: Write>(writer: &mut W, grids: &ChargeGrids) -> std::io::Result<()> {
    for (rule, grid) in grids.iter() {
        writer.write_all(results_line(rule, grid).as_bytes())?;
    }
    writer.flush()
}

/// Create (or overwrite) the results file and fill it
///
/// Failing to create the file is reported on `console` and logged, but is not
/// an error: the run carries on and `Ok(false)` is returned.
///
/// # Errors
///
/// Returns an error if the file was created but writing to it failed, or if
/// the console cannot be written to
pub fn save_results<W: Write>(path: &Path, grids: &ChargeGrids, console: &mut W) -> Result<bool> {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(error) => {
            warn!(path = %path.display(), %error, "Unable to open results file");
            writeln!(console, "Unable to open file")
                .map_err(|source| console_error("reporting file failure", source))?;
            return Ok(false);
        }
    };

    let mut writer = BufWriter::new(file);
    write_results(&mut writer, grids)
        .map_err(|source| file_system_error(path, "writing results", source))?;

    info!(path = %path.display(), "Results written");
    Ok(true)
}

/// Print the pre-normalization center values
///
/// # Errors
///
/// Returns an error if the console cannot be written to
pub fn write_center_summary<W: Write>(console: &mut W, normalized: &NormalizedGrids) -> Result<()> {
    for (rule, center) in normalized.centers.iter() {
        writeln!(
            console,
            "{} rule center pixel: {}",
            rule_title(rule),
            display(*center)
        )
        .map_err(|source| console_error("writing center summary", source))?;
    }
    Ok(())
}

/// Echoes every pixel's bounds and series values as they are computed
pub struct ConsoleTranscript<W: Write> {
    out: W,
}

impl<W: Write> ConsoleTranscript<W> {
    /// Wrap a console writer
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PixelObserver for ConsoleTranscript<W> {
    fn pixel_started(&mut self, _pixel: Pixel, bounds: &PixelBounds) -> Result<()> {
        let (a, b, c, e) = bounds.as_tuple();
        writeln!(self.out, "A = {a}, B = {b}, C = {c}, E = {e}")
            .map_err(|source| console_error("echoing pixel bounds", source))
    }

    fn pixel_finished(&mut self, _pixel: Pixel, sums: &ByRule<f64>) -> Result<()> {
        for (rule, value) in sums.iter() {
            writeln!(self.out, "Result from {rule} rule: {}", display(*value))
                .map_err(|source| console_error("echoing pixel results", source))?;
        }
        Ok(())
    }
}
