use thiserror::Error;

use neurobridge_core::error::CoreError;
use neurobridge_dialogue::error::DialogueError;
use neurobridge_instruments::error::InstrumentError;
use neurobridge_report::error::ReportError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("nothing to analyze yet: record a checklist answer or tapping trial first")]
    AssessmentNotStarted,

    #[error("a report was already generated: record new input to begin a fresh assessment")]
    NewAssessmentRequired,

    #[error("assessment has not been analyzed: run the analysis before generating a report")]
    AssessmentIncomplete,

    #[error("no report available: generate a health report before using the care-plan assistant")]
    ReportNotGenerated,

    #[error("instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    #[error("capture error: {0}")]
    Capture(#[from] CoreError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),

    #[error("dialogue error: {0}")]
    Dialogue(#[from] DialogueError),

    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("config version {found} is newer than this build supports ({supported})")]
    ConfigVersion { found: u32, supported: u32 },

    #[error("config is not a JSON object")]
    ConfigShape,
}
