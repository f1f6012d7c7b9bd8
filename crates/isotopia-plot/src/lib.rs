//! # isotopia-plot — Static charts of value over time.
//!
//! [`CurvePlotter`] renders one labelled line series with a grid and legend
//! to an SVG or PNG file. Length mismatches are rejected before any drawing
//! surface is created; every failure of the surface itself is reported as
//! [`PlotError::DisplayUnavailable`](isotopia_core::error::PlotError).

pub mod plotter;

pub use plotter::{CurvePlotter, PlotConfig, PlotFormat};
