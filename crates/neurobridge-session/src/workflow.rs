use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stage of the screening workflow. Strictly forward: input → analysis
/// → report → assistant, with new input after an analysis or report
/// starting a fresh assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WorkflowState {
    NotStarted,
    AssessmentInProgress,
    AssessmentComplete,
    ReportGenerated,
}

impl WorkflowState {
    /// Whether new checklist or tapping input continues the current
    /// assessment. In the later stages it starts a fresh one instead.
    pub fn accepts_input(self) -> bool {
        matches!(
            self,
            WorkflowState::NotStarted | WorkflowState::AssessmentInProgress
        )
    }

    /// Analysis needs recorded input that has not been superseded by a
    /// generated report.
    pub fn can_analyze(self) -> bool {
        matches!(
            self,
            WorkflowState::AssessmentInProgress | WorkflowState::AssessmentComplete
        )
    }

    /// Report generation needs a completed analysis.
    pub fn can_generate_report(self) -> bool {
        matches!(
            self,
            WorkflowState::AssessmentComplete | WorkflowState::ReportGenerated
        )
    }

    /// The assistant unlocks only once a report exists.
    pub fn can_converse(self) -> bool {
        matches!(self, WorkflowState::ReportGenerated)
    }
}
