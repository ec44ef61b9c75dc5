use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A binary answer to one symptom checklist question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn is_yes(self) -> bool {
        matches!(self, Answer::Yes)
    }
}

/// Checklist answers for one assessment, keyed by symptom id.
///
/// Re-recording an id overwrites the previous answer; only the latest
/// answer per symptom counts toward the risk score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct SymptomResponses(HashMap<String, Answer>);

impl SymptomResponses {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn record(&mut self, id: impl Into<String>, answer: Answer) {
        self.0.insert(id.into(), answer);
    }

    pub fn answer(&self, id: &str) -> Option<Answer> {
        self.0.get(id).copied()
    }

    /// Number of symptoms answered yes.
    pub fn yes_count(&self) -> usize {
        self.0.values().filter(|a| a.is_yes()).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Answer)> {
        self.0.iter().map(|(id, answer)| (id.as_str(), *answer))
    }
}
