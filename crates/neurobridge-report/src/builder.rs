use jiff::Timestamp;
use tracing::info;

use neurobridge_core::models::report::Report;
use neurobridge_core::models::responses::SymptomResponses;
use neurobridge_core::models::score::RiskScore;

use crate::error::ReportError;

/// Standing recommendations attached to every screening report.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Discuss these results with a healthcare provider",
    "Monitor symptoms regularly",
    "Consider lifestyle modifications like regular exercise and a balanced diet",
];

/// Assemble the structured report from an analyzed assessment.
pub fn build(responses: &SymptomResponses, score: RiskScore, generated_at: Timestamp) -> Report {
    info!(
        score = score.value(),
        symptoms = responses.len(),
        "building screening report"
    );
    Report {
        risk_score: score,
        symptoms: responses.clone(),
        generated_at,
        recommendations: RECOMMENDATIONS.iter().map(|r| (*r).to_string()).collect(),
    }
}

/// Serialize a report to its pretty-printed JSON exchange form.
pub fn to_json(report: &Report) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
