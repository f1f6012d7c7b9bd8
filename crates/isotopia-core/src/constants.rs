//! Shared constants. Rates are in inverse time units, times in the same unit.

/// Label attached to the plotted data series.
pub const SERIES_LABEL: &str = "Concentration";

/// Horizontal axis label.
pub const X_AXIS_LABEL: &str = "Time (units)";

/// Vertical axis label.
pub const Y_AXIS_LABEL: &str = "Concentration (units)";

/// Default chart width in pixels (8 inch figure at 100 dpi).
pub const DEFAULT_PLOT_WIDTH: u32 = 800;

/// Default chart height in pixels (6 inch figure at 100 dpi).
pub const DEFAULT_PLOT_HEIGHT: u32 = 600;

/// Default chart output path.
pub const DEFAULT_PLOT_OUTPUT: &str = "decay_curve.svg";

/// Default start of a generated time grid.
pub const DEFAULT_T_START: f64 = 0.0;

/// Default end of a generated time grid.
pub const DEFAULT_T_END: f64 = 50.0;

/// Default number of samples in a generated time grid.
pub const DEFAULT_POINTS: usize = 100;
