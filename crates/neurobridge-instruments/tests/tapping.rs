use neurobridge_core::models::taps::TapSequence;
use neurobridge_instruments::tapping::{self, MAX_TIMING_CONTRIBUTION};

fn taps(timestamps: &[f64]) -> TapSequence {
    TapSequence::new(timestamps.to_vec()).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn fewer_than_two_taps_yields_degenerate_features() {
    for sequence in [&[] as &[f64], &[3.5]] {
        let features = tapping::extract(&taps(sequence));
        assert_eq!(features.mean_interval, 0.0);
        assert_eq!(features.std_interval, 0.0);
        assert_eq!(features.risk_contribution, 0.0);
    }
}

#[test]
fn perfectly_regular_tapping_contributes_nothing() {
    let features = tapping::extract(&taps(&[0.0, 0.5, 1.0, 1.5]));
    assert_close(features.mean_interval, 0.5);
    assert_close(features.std_interval, 0.0);
    assert_close(features.risk_contribution, 0.0);
}

#[test]
fn interval_variability_uses_population_std() {
    // Intervals 0.2 and 0.8: mean 0.5, population std 0.3.
    let features = tapping::extract(&taps(&[0.0, 0.2, 1.0]));
    assert_close(features.mean_interval, 0.5);
    assert_close(features.std_interval, 0.3);
    assert_close(features.risk_contribution, 30.0);
}

#[test]
fn contribution_is_capped() {
    // Intervals 0.1 and 1.4: population std 0.65, raw contribution 65.
    let features = tapping::extract(&taps(&[0.0, 0.1, 1.5]));
    assert_close(features.risk_contribution, MAX_TIMING_CONTRIBUTION);
}

#[test]
fn contribution_never_leaves_bounds() {
    let trials: &[&[f64]] = &[
        &[],
        &[1.0],
        &[0.0, 0.5, 1.0],
        &[0.0, 0.01, 5.0, 5.02, 30.0],
        &[0.0, 0.0, 0.0, 10.0],
    ];
    for trial in trials {
        let features = tapping::extract(&taps(trial));
        assert!(features.risk_contribution >= 0.0);
        assert!(features.risk_contribution <= MAX_TIMING_CONTRIBUTION);
    }
}

#[test]
fn more_irregular_tapping_never_scores_lower() {
    let regular = tapping::extract(&taps(&[0.0, 0.5, 1.0, 1.5]));
    let mild = tapping::extract(&taps(&[0.0, 0.4, 1.0, 1.5]));
    let heavy = tapping::extract(&taps(&[0.0, 0.1, 1.4, 1.5]));

    assert!(regular.risk_contribution <= mild.risk_contribution);
    assert!(mild.risk_contribution <= heavy.risk_contribution);
    assert!(regular.risk_contribution < heavy.risk_contribution);
}

#[test]
fn fast_but_regular_tapping_still_contributes_nothing() {
    let features = tapping::extract(&taps(&[0.0, 0.1, 0.2, 0.3, 0.4]));
    assert_close(features.risk_contribution, 0.0);
}
