//! Reference scenarios for isotope decay, tracer dilution and plotting.

use isotopia_core::error::PlotError;
use isotopia_core::traits::DecayCurve;
use isotopia_core::types::{linspace, TimeSeries};
use isotopia_decay::{DecayModel, TracerModel};
use isotopia_plot::{CurvePlotter, PlotConfig};
use isotopia_tests::helpers::*;

#[test]
fn isotope_reference_curve() {
    let model = DecayModel::new(0.1);
    let remaining = model.remaining_quantity(100.0, &[0.0, 1.0, 5.0, 10.0]);
    assert_close(&remaining, &[100.0, 90.48, 60.65, 36.79], REFERENCE_TOL);
}

#[test]
fn isotope_reference_half_life() {
    assert!((DecayModel::new(0.1).half_life() - 6.931).abs() < 1e-3);
}

#[test]
fn tracer_reference_curve() {
    let model = TracerModel::new(0.05, 0.02);
    let concentration = model.concentration_over_time(50.0, &[0.0, 10.0]);
    // Effective rate 0.07: 50 * e^-0.7.
    assert_close(&concentration, &[50.0, 24.83], REFERENCE_TOL);
}

#[test]
fn tracer_without_dilution_term_is_isotope_curve() {
    // The decay constant alone gives 50 * e^-0.5 at t = 10.
    let isotope = DecayModel::new(0.05).remaining_quantity(50.0, &[0.0, 10.0]);
    assert_close(&isotope, &[50.0, 30.33], REFERENCE_TOL);
}

#[test]
fn models_share_the_curve_interface() {
    let curves: Vec<Box<dyn DecayCurve>> = vec![
        Box::new(DecayModel::new(0.07)),
        Box::new(TracerModel::new(0.05, 0.02)),
    ];
    let t = linspace(0.0, 40.0, 9);
    let a = curves[0].evaluate(10.0, &t);
    let b = curves[1].evaluate(10.0, &t);
    for (x, y) in a.iter().zip(&b) {
        assert!(rel_close(*x, *y, 1e-12));
    }
}

#[test]
fn output_length_always_matches_input() {
    let model = DecayModel::new(0.3);
    for n in [0, 1, 2, 17, 1000] {
        let t = linspace(0.0, 10.0, n);
        assert_eq!(model.remaining_quantity(1.0, &t).len(), n);
        assert_eq!(model.series(1.0, &t).len(), n);
    }
}

#[test]
fn plot_rejects_mismatched_lengths() {
    let dir = tempfile::tempdir().unwrap();
    let plotter = CurvePlotter::new(PlotConfig::with_output(dir.path().join("c.svg")));
    let err = plotter
        .plot(&[0.0, 1.0, 5.0, 10.0], &[100.0, 90.48, 60.65], "Mismatch")
        .unwrap_err();
    assert_eq!(err, PlotError::InputLengthMismatch { time: 4, values: 3 });
}

#[test]
fn compose_model_and_plotter() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tracer.svg");
    let plotter = CurvePlotter::new(PlotConfig::with_output(&out));

    let time = linspace(0.0, 50.0, 100);
    let series = TracerModel::new(0.05, 0.02).series(50.0, &time);

    match plotter.plot_series(&series, "Tracer concentration") {
        Ok(()) => assert!(out.exists()),
        // Headless hosts without fonts cannot draw text.
        Err(e) => assert!(matches!(e, PlotError::DisplayUnavailable(_)), "{e:?}"),
    }
}

#[test]
fn series_exports_as_json() {
    let series = DecayModel::new(0.1).series(100.0, &[0.0, 10.0]);
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["time"], serde_json::json!([0.0, 10.0]));
    assert_eq!(json["values"][0], serde_json::json!(100.0));

    let back: TimeSeries = serde_json::from_value(json).unwrap();
    assert_eq!(back, series);
}
