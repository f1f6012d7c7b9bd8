//! Error types for Isotopia.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid {name}: {value} (must be finite and > 0)")] InvalidConstant { name: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    #[error("input length mismatch: time has {time} points, values has {values}")] InputLengthMismatch { time: usize, values: usize },
    #[error("display unavailable: {0}")] DisplayUnavailable(String),
}

#[derive(Error, Debug)]
pub enum IsotopiaError {
    #[error(transparent)] Model(#[from] ModelError),
    #[error(transparent)] Plot(#[from] PlotError),
}
