//! Shared test helpers for integration tests.

/// Absolute tolerance used for the two-decimal reference figures.
pub const REFERENCE_TOL: f64 = 5e-3;

/// Assert two sequences agree elementwise within `tol`.
pub fn assert_close(got: &[f64], want: &[f64], tol: f64) {
    assert_eq!(got.len(), want.len(), "length differs: {got:?} vs {want:?}");
    for (i, (g, w)) in got.iter().zip(want).enumerate() {
        assert!((g - w).abs() <= tol, "index {i}: got {g}, want {w} (tol {tol})");
    }
}

/// Relative closeness with a floor of 1.0 on the scale.
pub fn rel_close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}
