use neurobridge_core::models::responses::SymptomResponses;
use neurobridge_core::models::score::RiskScore;
use neurobridge_core::models::taps::TapSequence;

use crate::tapping;

/// Score weight per positive checklist answer.
pub const SYMPTOM_WEIGHT: f64 = 10.0;

/// Compute the composite risk score from checklist answers and an
/// optional tapping trial.
///
/// The raw sum is `SYMPTOM_WEIGHT * yes_count` plus the bounded timing
/// contribution; quantization into 0..=100 happens in
/// [`RiskScore::from_raw`]. A missing or too-short tapping trial adds
/// nothing, and "no" answers never lower the score.
pub fn score(responses: &SymptomResponses, taps: Option<&TapSequence>) -> RiskScore {
    let mut raw = SYMPTOM_WEIGHT * responses.yes_count() as f64;
    if let Some(taps) = taps {
        raw += tapping::extract(taps).risk_contribution;
    }
    RiskScore::from_raw(raw)
}
