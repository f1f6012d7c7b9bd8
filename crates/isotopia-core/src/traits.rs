//! Trait interfaces shared across Isotopia crates.
//!
//! - [`DecayCurve`]: first-order exponential loss (isotopia-decay implements)

use crate::types::TimeSeries;

/// A closed-form first-order decay curve `q(t) = q0 * exp(-rate * t)`.
///
/// Implementors only supply the rate. Evaluation is elementwise, pure and
/// unvalidated: non-physical rates or negative times are evaluated as-is.
pub trait DecayCurve: Send + Sync {
    /// Combined first-order loss rate, in inverse time units.
    fn rate(&self) -> f64;

    /// Evaluate the curve at every time point, preserving order and length.
    fn evaluate(&self, initial: f64, time: &[f64]) -> Vec<f64> {
        let rate = self.rate();
        time.iter().map(|&t| initial * (-rate * t).exp()).collect()
    }

    /// Time for the curve to fall to half its initial value, `ln 2 / rate`.
    ///
    /// A zero rate yields `+inf`, a negative rate a negative doubling time.
    fn half_life(&self) -> f64 {
        std::f64::consts::LN_2 / self.rate()
    }

    /// Evaluate into a [`TimeSeries`] paired with `time`.
    fn series(&self, initial: f64, time: &[f64]) -> TimeSeries {
        TimeSeries::from_evaluated(time, self.evaluate(initial, time))
    }
}
