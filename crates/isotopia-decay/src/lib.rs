//! # isotopia-decay — Closed-form decay models.
//!
//! Every computation is a single exponential evaluated elementwise over a
//! caller-supplied time grid:
//! - **Isotope decay**: `A * exp(-λ t)`, with half-life `ln 2 / λ`.
//! - **Tracer decay with dilution**: `C0 * exp(-(λ + d) t)`, where the
//!   dilution rate `d` adds a second first-order loss to the decay constant.
//!
//! Constructors are pass-through by default: zero, negative or non-finite
//! constants are accepted and evaluated with IEEE-754 semantics. The
//! `validated` constructors reject them with [`ModelError::InvalidConstant`].
//!
//! [`ModelError::InvalidConstant`]: isotopia_core::error::ModelError::InvalidConstant

pub mod isotope;
pub mod tracer;

pub use isotope::DecayModel;
pub use tracer::TracerModel;

use isotopia_core::error::ModelError;

/// Reject constants that are not finite or not strictly positive.
pub(crate) fn check_constant(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::warn!(name, value, "rejected non-physical rate constant");
        Err(ModelError::InvalidConstant { name, value })
    }
}
