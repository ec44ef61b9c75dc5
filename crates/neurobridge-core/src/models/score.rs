use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A composite screening risk score on the 0..=100 scale.
///
/// Quantized from the raw weighted sum by rounding to the nearest
/// integer, then clamping into range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct RiskScore(u8);

impl RiskScore {
    pub fn from_raw(raw: f64) -> Self {
        Self(raw.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn level(self) -> RiskLevel {
        RiskLevel::from_score(self)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse interpretation band for a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: RiskScore) -> Self {
        match score.value() {
            0..=29 => RiskLevel::Low,
            30..=69 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }

    /// One-sentence advisory shown alongside the score.
    pub fn advisory(self) -> &'static str {
        match self {
            RiskLevel::Low => "This suggests low risk. Keep monitoring your health regularly.",
            RiskLevel::Moderate => {
                "This suggests moderate risk. Consider discussing these results with a healthcare provider."
            }
            RiskLevel::High => {
                "This suggests higher risk. Please consult with a healthcare professional for a proper evaluation."
            }
        }
    }
}
