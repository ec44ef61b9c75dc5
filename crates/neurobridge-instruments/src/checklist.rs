use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

/// One yes/no question on the symptom checklist.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomQuestion {
    pub id: String,
    pub question: String,
}

/// The early-sign symptom checklist: ten binary items covering the motor
/// and non-motor signs screened for. Item order is canonical and stable —
/// reports and shells present symptoms in this order.
pub struct SymptomChecklist;

impl SymptomChecklist {
    pub fn questions() -> &'static [SymptomQuestion] {
        static QUESTIONS: LazyLock<Vec<SymptomQuestion>> = LazyLock::new(|| {
            let items = [
                (
                    "tremor",
                    "Do you experience tremors or shaking in your hands, arms, legs, or jaw?",
                ),
                (
                    "rigidity",
                    "Do you feel muscle stiffness or resistance to movement?",
                ),
                (
                    "bradykinesia",
                    "Do you have slowness of movement or difficulty initiating movement?",
                ),
                (
                    "postural",
                    "Do you have trouble with balance or experience falls?",
                ),
                (
                    "gait",
                    "Do you have changes in your walking pattern, like shuffling steps or freezing?",
                ),
                (
                    "micrographia",
                    "Has your handwriting become smaller or more crowded?",
                ),
                (
                    "speech",
                    "Has your speech become softer, monotone, or slurred?",
                ),
                (
                    "facial",
                    "Have you noticed reduced facial expression (masked face)?",
                ),
                (
                    "sleep",
                    "Do you experience trouble sleeping or excessive daytime sleepiness?",
                ),
                (
                    "memory",
                    "Do you have problems with memory or thinking clearly?",
                ),
            ];

            items
                .iter()
                .map(|(id, question)| SymptomQuestion {
                    id: id.to_string(),
                    question: question.to_string(),
                })
                .collect()
        });
        &QUESTIONS
    }

    /// Canonical symptom ids in presentation order.
    pub fn ids() -> impl Iterator<Item = &'static str> {
        Self::questions().iter().map(|q| q.id.as_str())
    }

    pub fn contains(id: &str) -> bool {
        Self::questions().iter().any(|q| q.id == id)
    }

    /// Look up a question by symptom id.
    pub fn question(id: &str) -> Option<&'static SymptomQuestion> {
        Self::questions().iter().find(|q| q.id == id)
    }

    /// Reject ids that are not on the checklist. Answer recording goes
    /// through this so malformed input fails at the boundary.
    pub fn ensure_known(id: &str) -> Result<(), InstrumentError> {
        if Self::contains(id) {
            Ok(())
        } else {
            Err(InstrumentError::UnknownSymptom(id.to_string()))
        }
    }
}
