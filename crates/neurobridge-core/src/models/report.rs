use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::responses::SymptomResponses;
use super::score::RiskScore;

/// The structured screening report handed to rendering and to any
/// consuming shell.
///
/// Serialized field names are the exchange contract: `risk_score`,
/// `symptoms`, `date`, `recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub risk_score: RiskScore,
    pub symptoms: SymptomResponses,
    #[serde(rename = "date")]
    pub generated_at: jiff::Timestamp,
    pub recommendations: Vec<String>,
}
