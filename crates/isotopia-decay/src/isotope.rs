//! Single-isotope exponential decay.

use isotopia_core::error::ModelError;
use isotopia_core::traits::DecayCurve;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::check_constant;

/// Decay of one isotope with decay constant `λ`.
///
/// Immutable once constructed.
///
/// # Examples
///
/// ```
/// use isotopia_decay::DecayModel;
/// let model = DecayModel::new(0.1);
/// let remaining = model.remaining_quantity(100.0, &[0.0, 10.0]);
/// assert_eq!(remaining[0], 100.0);
/// assert!((remaining[1] - 36.79).abs() < 0.01);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DecayModel {
    decay_constant: f64,
}

impl DecayModel {
    /// Create a model without validating `decay_constant`.
    pub fn new(decay_constant: f64) -> Self {
        debug!(decay_constant, "decay model");
        Self { decay_constant }
    }

    /// Create a model, rejecting a constant that is not finite and `> 0`.
    pub fn validated(decay_constant: f64) -> Result<Self, ModelError> {
        check_constant("decay_constant", decay_constant).map(Self::new)
    }

    /// Create a model from its half-life, `λ = ln 2 / t½`.
    pub fn from_half_life(half_life: f64) -> Self {
        Self::new(std::f64::consts::LN_2 / half_life)
    }

    pub fn decay_constant(&self) -> f64 {
        self.decay_constant
    }

    /// Remaining quantity `initial_amount * exp(-λ t)` at every `t`, in order.
    pub fn remaining_quantity(&self, initial_amount: f64, time: &[f64]) -> Vec<f64> {
        debug!(initial_amount, points = time.len(), "remaining quantity");
        self.evaluate(initial_amount, time)
    }

    /// Half-life `ln 2 / λ`. Infinite when `λ == 0`.
    pub fn half_life(&self) -> f64 {
        DecayCurve::half_life(self)
    }
}

impl DecayCurve for DecayModel {
    fn rate(&self) -> f64 {
        self.decay_constant
    }
}
