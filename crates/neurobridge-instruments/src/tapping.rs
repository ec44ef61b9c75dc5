use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neurobridge_core::models::taps::TapSequence;

/// Cap on how much tap-timing variability can add to the risk score.
pub const MAX_TIMING_CONTRIBUTION: f64 = 50.0;

/// Scale factor mapping interval standard deviation (seconds) onto
/// score points.
const VARIABILITY_GAIN: f64 = 100.0;

/// Timing features derived from one finger-tapping trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimingFeatures {
    /// Mean inter-tap interval, seconds.
    pub mean_interval: f64,
    /// Population standard deviation of the intervals, seconds.
    pub std_interval: f64,
    /// Bounded score contribution in `[0, MAX_TIMING_CONTRIBUTION]`.
    pub risk_contribution: f64,
}

impl TimingFeatures {
    /// The degenerate result for trials with fewer than two taps: no
    /// intervals exist, so every feature is zero and the trial adds
    /// nothing to the score.
    pub fn degenerate() -> Self {
        Self {
            mean_interval: 0.0,
            std_interval: 0.0,
            risk_contribution: 0.0,
        }
    }
}

/// Extract timing features from a tap sequence.
///
/// Irregular tapping (high interval variability) raises the risk
/// contribution linearly until the cap; perfectly regular tapping
/// contributes zero regardless of speed.
pub fn extract(taps: &TapSequence) -> TimingFeatures {
    let intervals = taps.intervals();
    if intervals.is_empty() {
        return TimingFeatures::degenerate();
    }

    let mean = intervals.iter().sum::<f64>() / intervals.len() as f64;
    let variance = intervals
        .iter()
        .map(|interval| {
            let deviation = interval - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / intervals.len() as f64;
    let std = variance.sqrt();

    TimingFeatures {
        mean_interval: mean,
        std_interval: std,
        risk_contribution: (std * VARIABILITY_GAIN).min(MAX_TIMING_CONTRIBUTION),
    }
}
