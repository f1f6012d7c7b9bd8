//! Tracer concentration under simultaneous decay and dilution.
//!
//! Dilution is modelled as a second first-order loss, so the two rates add:
//! `C(t) = C0 * exp(-(λ + d) t)`.

use isotopia_core::error::ModelError;
use isotopia_core::traits::DecayCurve;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::check_constant;

/// Decaying tracer diluted at a constant rate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TracerModel {
    decay_constant: f64,
    dilution_rate: f64,
}

impl TracerModel {
    /// Create a model without validating either constant.
    pub fn new(decay_constant: f64, dilution_rate: f64) -> Self {
        debug!(decay_constant, dilution_rate, "tracer model");
        Self {
            decay_constant,
            dilution_rate,
        }
    }

    /// Create a model, rejecting constants that are not finite and `> 0`.
    pub fn validated(decay_constant: f64, dilution_rate: f64) -> Result<Self, ModelError> {
        let decay_constant = check_constant("decay_constant", decay_constant)?;
        let dilution_rate = check_constant("dilution_rate", dilution_rate)?;
        Ok(Self::new(decay_constant, dilution_rate))
    }

    pub fn decay_constant(&self) -> f64 {
        self.decay_constant
    }

    pub fn dilution_rate(&self) -> f64 {
        self.dilution_rate
    }

    /// Combined loss rate `λ + d`.
    pub fn effective_decay(&self) -> f64 {
        self.decay_constant + self.dilution_rate
    }

    /// Concentration `initial_concentration * exp(-(λ + d) t)` at every `t`, in order.
    pub fn concentration_over_time(&self, initial_concentration: f64, time: &[f64]) -> Vec<f64> {
        debug!(
            initial_concentration,
            effective_decay = self.effective_decay(),
            points = time.len(),
            "concentration over time"
        );
        self.evaluate(initial_concentration, time)
    }

    /// Effective half-life `ln 2 / (λ + d)`.
    pub fn half_life(&self) -> f64 {
        DecayCurve::half_life(self)
    }
}

impl DecayCurve for TracerModel {
    fn rate(&self) -> f64 {
        self.effective_decay()
    }
}
