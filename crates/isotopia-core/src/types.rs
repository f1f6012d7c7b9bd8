//! Time series and time grid types.
//!
//! A [`TimeSeries`] pairs an ordered sequence of time points with the values
//! computed at each of them. Both sequences always have the same length.

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// Parallel time/value sequences of equal length.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(try_from = "RawSeries")]
pub struct TimeSeries {
    time: Vec<f64>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSeries {
    time: Vec<f64>,
    values: Vec<f64>,
}

impl TryFrom<RawSeries> for TimeSeries {
    type Error = PlotError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Self::new(raw.time, raw.values)
    }
}

impl TimeSeries {
    /// Pair `time` with `values`, rejecting sequences of different lengths.
    pub fn new(time: Vec<f64>, values: Vec<f64>) -> Result<Self, PlotError> {
        if time.len() != values.len() {
            return Err(PlotError::InputLengthMismatch {
                time: time.len(),
                values: values.len(),
            });
        }
        Ok(Self { time, values })
    }

    /// Build a series by evaluating `f` at every time point, in order.
    pub fn from_fn(time: &[f64], f: impl Fn(f64) -> f64) -> Self {
        Self {
            time: time.to_vec(),
            values: time.iter().map(|&t| f(t)).collect(),
        }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Pair `time` with values already computed from it, one per point.
    pub(crate) fn from_evaluated(time: &[f64], values: Vec<f64>) -> Self {
        debug_assert_eq!(time.len(), values.len());
        Self {
            time: time.to_vec(),
            values,
        }
    }

    /// Iterate over `(t, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.values.iter().copied())
    }

    /// Min and max over the finite values, or `None` if there are none.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(&self.values)
    }

    /// Split back into the owned `(time, values)` pair.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.values)
    }
}

/// Min and max over the finite entries of `xs`.
pub fn finite_range(xs: &[f64]) -> Option<(f64, f64)> {
    xs.iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
}

/// `num` evenly spaced points over `[start, stop]`, both endpoints included.
///
/// # Examples
///
/// ```
/// use isotopia_core::types::linspace;
/// assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut grid: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            // Pin the last point so rounding never misses the endpoint.
            grid[num - 1] = stop;
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_unequal_lengths() {
        let err = TimeSeries::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, PlotError::InputLengthMismatch { time: 4, values: 3 });
    }

    #[test]
    fn new_accepts_empty() {
        let s = TimeSeries::new(vec![], vec![]).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.value_range(), None);
    }

    #[test]
    fn from_fn_preserves_order() {
        let s = TimeSeries::from_fn(&[3.0, 1.0, 2.0], |t| t * 10.0);
        assert_eq!(s.time(), &[3.0, 1.0, 2.0]);
        assert_eq!(s.values(), &[30.0, 10.0, 20.0]);
    }

    #[test]
    fn points_pairs_elementwise() {
        let s = TimeSeries::new(vec![0.0, 1.0], vec![5.0, 4.0]).unwrap();
        let pts: Vec<_> = s.points().collect();
        assert_eq!(pts, vec![(0.0, 5.0), (1.0, 4.0)]);
    }

    #[test]
    fn value_range_skips_non_finite() {
        let s = TimeSeries::new(vec![0.0, 1.0, 2.0], vec![f64::NAN, 2.0, f64::INFINITY]).unwrap();
        assert_eq!(s.value_range(), Some((2.0, 2.0)));
    }

    #[test]
    fn serde_round_trip_keeps_invariant() {
        let s = TimeSeries::new(vec![0.0, 1.0], vec![100.0, 90.0]).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn deserialize_rejects_unequal_lengths() {
        let json = r#"{"time":[0.0,1.0],"values":[1.0]}"#;
        assert!(serde_json::from_str::<TimeSeries>(json).is_err());
    }

    #[test]
    fn linspace_small_cases() {
        assert!(linspace(0.0, 5.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_descending() {
        assert_eq!(linspace(10.0, 0.0, 3), vec![10.0, 5.0, 0.0]);
    }

    proptest! {
        #[test]
        fn linspace_len_and_endpoints(
            start in -1e3f64..1e3,
            span in 0.0f64..1e3,
            num in 2usize..500,
        ) {
            let stop = start + span;
            let grid = linspace(start, stop, num);
            prop_assert_eq!(grid.len(), num);
            prop_assert_eq!(grid[0], start);
            prop_assert_eq!(grid[num - 1], stop);
        }

        #[test]
        fn linspace_non_decreasing(span in 0.0f64..1e3, num in 2usize..500) {
            let grid = linspace(0.0, span, num);
            for w in grid.windows(2) {
                prop_assert!(w[0] <= w[1]);
            }
        }
    }
}
