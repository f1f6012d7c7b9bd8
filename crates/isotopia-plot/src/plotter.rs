//! Line chart rendering for decay and tracer curves.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use isotopia_core::constants::{
    DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_OUTPUT, DEFAULT_PLOT_WIDTH, SERIES_LABEL, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
use isotopia_core::error::PlotError;
use isotopia_core::types::{finite_range, TimeSeries};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info, warn};

/// Fraction of the data span added above and below the value axis.
const Y_MARGIN: f64 = 0.05;

/// Largest absolute axis bound accepted for layout.
const MAX_AXIS_MAGNITUDE: f64 = 1e300;

/// Output image format, picked from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotFormat {
    #[default]
    Svg,
    Png,
}

impl PlotFormat {
    /// `.png` (any case) renders a bitmap; everything else renders SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Svg,
        }
    }
}

/// Where and how large to render a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Output file. The extension selects the [`PlotFormat`].
    pub output: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_PLOT_OUTPUT),
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

impl PlotConfig {
    /// Default size, writing to `output`.
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn format(&self) -> PlotFormat {
        PlotFormat::from_path(&self.output)
    }
}

/// Renders a single "Concentration" series against time.
///
/// Each call draws one complete chart: title, axis labels, grid and legend.
/// The plotter holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct CurvePlotter {
    config: PlotConfig,
}

impl CurvePlotter {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Render `values` against `time` to the configured output file.
    ///
    /// Fails with [`PlotError::InputLengthMismatch`] before touching the
    /// output when the sequences differ in length, and with
    /// [`PlotError::DisplayUnavailable`] when the chart cannot be drawn or
    /// written.
    pub fn plot(&self, time: &[f64], values: &[f64], title: &str) -> Result<(), PlotError> {
        check_lengths(time, values)?;
        let ranges = chart_ranges(time, values)?;

        let size = (self.config.width, self.config.height);
        let path = self.config.output.as_path();
        let result = match self.config.format() {
            PlotFormat::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                draw(root, ranges, time, values, title)
            }
            PlotFormat::Png => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                draw(root, ranges, time, values, title)
            }
        };

        match &result {
            Ok(()) => info!(path = %path.display(), points = time.len(), title, "chart written"),
            Err(e) => warn!(path = %path.display(), error = %e, "chart not rendered"),
        }
        result
    }

    /// Render a [`TimeSeries`] to the configured output file.
    pub fn plot_series(&self, series: &TimeSeries, title: &str) -> Result<(), PlotError> {
        self.plot(series.time(), series.values(), title)
    }

    /// Render to an in-memory SVG document instead of a file.
    pub fn render_svg(
        &self,
        time: &[f64],
        values: &[f64],
        title: &str,
    ) -> Result<String, PlotError> {
        check_lengths(time, values)?;
        let ranges = chart_ranges(time, values)?;

        let mut svg = String::new();
        let size = (self.config.width, self.config.height);
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw(root, ranges, time, values, title)?;
        Ok(svg)
    }
}

fn check_lengths(time: &[f64], values: &[f64]) -> Result<(), PlotError> {
    if time.len() != values.len() {
        return Err(PlotError::InputLengthMismatch {
            time: time.len(),
            values: values.len(),
        });
    }
    Ok(())
}

fn unavailable(e: impl Display) -> PlotError {
    PlotError::DisplayUnavailable(e.to_string())
}

/// Axis bounds over the finite entries of `xs`, widened when empty or flat.
///
/// Fails when the padded bounds or their span leave the range plotters can
/// lay out ticks for, which finite but extreme inputs can reach.
fn axis_range(xs: &[f64], margin: f64) -> Result<(f64, f64), PlotError> {
    let (lo, hi) = match finite_range(xs) {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => {
            let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.5 };
            (lo - pad, hi + pad)
        }
        Some((lo, hi)) => {
            // Scale before subtracting so a wide span cannot overflow.
            let pad = hi * margin - lo * margin;
            (lo - pad, hi + pad)
        }
    };

    let span = hi - lo;
    if !span.is_finite() || lo.abs() > MAX_AXIS_MAGNITUDE || hi.abs() > MAX_AXIS_MAGNITUDE {
        return Err(PlotError::DisplayUnavailable(format!(
            "axis range [{lo:e}, {hi:e}] exceeds the drawable magnitude {MAX_AXIS_MAGNITUDE:e}"
        )));
    }
    Ok((lo, hi))
}

/// Axis bounds for both axes, as `((x_lo, x_hi), (y_lo, y_hi))`.
type Ranges = ((f64, f64), (f64, f64));

fn chart_ranges(time: &[f64], values: &[f64]) -> Result<Ranges, PlotError> {
    let x = axis_range(time, 0.0)?;
    let y = axis_range(values, Y_MARGIN)?;
    debug!(x_lo = x.0, x_hi = x.1, y_lo = y.0, y_hi = y.1, "chart ranges");
    Ok((x, y))
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    ((x_lo, x_hi), (y_lo, y_hi)): Ranges,
    time: &[f64],
    values: &[f64],
    title: &str,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(unavailable)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(unavailable)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()
        .map_err(unavailable)?;

    // Non-finite points cannot be placed on the canvas.
    let points = time
        .iter()
        .copied()
        .zip(values.iter().copied())
        .filter(|(t, v)| t.is_finite() && v.is_finite());

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(unavailable)?
        .label(SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(unavailable)?;

    root.present().map_err(unavailable)
}
