//! The screening session: one user's pass through assessment, report,
//! and assistant.

use jiff::Timestamp;
use tracing::{info, warn};
use uuid::Uuid;

use neurobridge_core::models::chat::ConversationHistory;
use neurobridge_core::models::report::Report;
use neurobridge_core::models::responses::{Answer, SymptomResponses};
use neurobridge_core::models::score::RiskScore;
use neurobridge_core::models::taps::TapSequence;
use neurobridge_dialogue::rules::RuleBasedResponder;
use neurobridge_dialogue::{DialogueEngine, retrieval};
use neurobridge_instruments::checklist::SymptomChecklist;
use neurobridge_instruments::scoring;
use neurobridge_instruments::tapping::{self, TimingFeatures};
use neurobridge_report::{builder, render};

use crate::config::{KnowledgeBase, ScreeningConfig};
use crate::error::SessionError;
use crate::workflow::WorkflowState;

/// One user's screening session.
///
/// Owns all assessment state and enforces the workflow: input →
/// analysis → report → assistant. Recording new input after an analysis
/// or report starts a fresh assessment atomically; the conversation
/// transcript survives restarts and is only cleared on request.
pub struct ScreeningSession {
    id: Uuid,
    started_at: Timestamp,
    state: WorkflowState,
    responses: SymptomResponses,
    taps: Option<TapSequence>,
    risk_score: Option<RiskScore>,
    report: Option<Report>,
    history: ConversationHistory,
    engine: DialogueEngine,
}

impl ScreeningSession {
    /// Build a session from config: seeds the assistant and picks its
    /// knowledge base. Never fails — an unusable knowledge base
    /// downgrades the assistant to rule-based responses.
    pub fn new(config: &ScreeningConfig) -> Self {
        let rules = match config.dialogue_seed {
            Some(seed) => RuleBasedResponder::with_seed(seed),
            None => RuleBasedResponder::new(),
        };

        let engine = match &config.knowledge_base {
            KnowledgeBase::Disabled => DialogueEngine::new(rules),
            KnowledgeBase::Bundled => {
                DialogueEngine::with_retrieval(rules, retrieval::BUNDLED_GUIDELINES)
            }
            KnowledgeBase::File { path } => match std::fs::read_to_string(path) {
                Ok(text) => DialogueEngine::with_retrieval(rules, &text),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "knowledge base unreadable, using rule-based responses only"
                    );
                    DialogueEngine::new(rules)
                }
            },
        };

        Self::with_engine(engine)
    }

    /// Build a session around a prepared engine.
    pub fn with_engine(engine: DialogueEngine) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "screening session started");
        Self {
            id,
            started_at: Timestamp::now(),
            state: WorkflowState::NotStarted,
            responses: SymptomResponses::new(),
            taps: None,
            risk_score: None,
            report: None,
            history: ConversationHistory::new(),
            engine,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn responses(&self) -> &SymptomResponses {
        &self.responses
    }

    pub fn taps(&self) -> Option<&TapSequence> {
        self.taps.as_ref()
    }

    pub fn risk_score(&self) -> Option<RiskScore> {
        self.risk_score
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn conversation(&self) -> &ConversationHistory {
        &self.history
    }

    /// Timing features for the recorded tapping trial, if any.
    pub fn timing_features(&self) -> Option<TimingFeatures> {
        self.taps.as_ref().map(tapping::extract)
    }

    // ── Assessment input ─────────────────────────────────────────────────────

    /// Record one checklist answer. Unknown symptom ids are rejected
    /// without touching any state.
    pub fn record_answer(&mut self, symptom_id: &str, answer: Answer) -> Result<(), SessionError> {
        SymptomChecklist::ensure_known(symptom_id)?;
        self.prepare_for_input();
        self.responses.record(symptom_id, answer);
        Ok(())
    }

    /// Record a tapping trial, replacing any earlier one.
    pub fn record_taps(&mut self, taps: TapSequence) {
        self.prepare_for_input();
        info!(session = %self.id, taps = taps.len(), "tapping trial recorded");
        self.taps = Some(taps);
    }

    /// Start a fresh assessment explicitly, dropping previous answers,
    /// taps, score, and report.
    pub fn begin_assessment(&mut self) {
        self.reset_assessment();
    }

    // ── Workflow operations ──────────────────────────────────────────────────

    /// Score the current assessment. Repeatable while the assessment is
    /// complete; once a report is generated, new input must start a
    /// fresh assessment first.
    pub fn analyze(&mut self) -> Result<RiskScore, SessionError> {
        match self.state {
            WorkflowState::NotStarted => return Err(SessionError::AssessmentNotStarted),
            WorkflowState::ReportGenerated => return Err(SessionError::NewAssessmentRequired),
            WorkflowState::AssessmentInProgress | WorkflowState::AssessmentComplete => {}
        }

        let score = scoring::score(&self.responses, self.taps.as_ref());
        self.risk_score = Some(score);
        self.state = WorkflowState::AssessmentComplete;
        info!(
            session = %self.id,
            score = score.value(),
            level = ?score.level(),
            "assessment analyzed"
        );
        Ok(score)
    }

    /// Generate the structured report for the analyzed assessment.
    pub fn generate_report(&mut self) -> Result<&Report, SessionError> {
        if !self.state.can_generate_report() {
            return Err(SessionError::AssessmentIncomplete);
        }
        let Some(score) = self.risk_score else {
            return Err(SessionError::AssessmentIncomplete);
        };

        let report = builder::build(&self.responses, score, Timestamp::now());
        self.state = WorkflowState::ReportGenerated;
        info!(session = %self.id, "report generated");
        Ok(self.report.insert(report))
    }

    /// The current report as pretty-printed JSON.
    pub fn report_json(&self) -> Result<String, SessionError> {
        let report = self
            .report
            .as_ref()
            .ok_or(SessionError::ReportNotGenerated)?;
        Ok(builder::to_json(report)?)
    }

    /// The current report as the plain-text summary.
    pub fn report_text(&self) -> Result<String, SessionError> {
        let report = self
            .report
            .as_ref()
            .ok_or(SessionError::ReportNotGenerated)?;
        Ok(render::render_text(report)?)
    }

    /// Ask the care-plan assistant a question. Available once a report
    /// exists; the exchange lands in the conversation transcript.
    pub fn ask(&mut self, query: &str) -> Result<String, SessionError> {
        if !self.state.can_converse() {
            return Err(SessionError::ReportNotGenerated);
        }
        let reply = self
            .engine
            .respond(query, self.risk_score, &mut self.history)?;
        Ok(reply)
    }

    /// Clear the conversation transcript. Assessment state is untouched.
    pub fn clear_conversation(&mut self) {
        self.history.clear();
    }

    // ── Internals ────────────────────────────────────────────────────────────

    /// Route new input: continue the current assessment, or atomically
    /// start a fresh one after an analysis or report.
    fn prepare_for_input(&mut self) {
        if !self.state.accepts_input() {
            self.reset_assessment();
        } else if self.state == WorkflowState::NotStarted {
            self.state = WorkflowState::AssessmentInProgress;
        }
    }

    /// Drop all assessment data and return to `AssessmentInProgress`.
    /// Runs under `&mut self`, so no reader can observe a half-cleared
    /// session.
    fn reset_assessment(&mut self) {
        self.responses = SymptomResponses::new();
        self.taps = None;
        self.risk_score = None;
        self.report = None;
        self.state = WorkflowState::AssessmentInProgress;
        info!(session = %self.id, "fresh assessment started");
    }
}
