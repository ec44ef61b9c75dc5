//! neurobridge-dialogue
//!
//! The care-plan assistant: deterministic rule-based responses, with an
//! optional local-retrieval responder layered on top. Retrieval is a
//! best-effort upgrade — any failure to build or query the index falls
//! back to the rule table, never to the caller.

pub mod error;
pub mod retrieval;
pub mod rules;

use tracing::{debug, warn};

use neurobridge_core::models::chat::{ChatRole, ConversationHistory};
use neurobridge_core::models::score::RiskScore;

use crate::error::DialogueError;
use crate::retrieval::RetrievalResponder;
use crate::rules::RuleBasedResponder;

/// Conversation starters surfaced by shells next to the chat input.
pub fn suggested_questions() -> &'static [&'static str] {
    &[
        "What lifestyle changes can I make to improve my neurological health?",
        "How accurate is this assessment?",
        "What are the early signs of Parkinson's disease?",
        "Should I see a specialist based on my results?",
        "What exercises can help with coordination?",
        "How often should I monitor my symptoms?",
    ]
}

/// The assistant behind the personalized care-plan stage.
///
/// Owns the responders; the conversation transcript belongs to the
/// caller and is appended to on every successful exchange.
pub struct DialogueEngine {
    rules: RuleBasedResponder,
    retrieval: Option<RetrievalResponder>,
}

impl DialogueEngine {
    /// Rules-only engine.
    pub fn new(rules: RuleBasedResponder) -> Self {
        Self {
            rules,
            retrieval: None,
        }
    }

    /// Engine with a retrieval responder over the given guideline text.
    ///
    /// The index is probed once, here. If it cannot be built the engine
    /// permanently downgrades to rules-only and logs the reason; the
    /// caller sees a working engine either way.
    pub fn with_retrieval(rules: RuleBasedResponder, knowledge_text: &str) -> Self {
        match RetrievalResponder::build(knowledge_text) {
            Ok(retrieval) => Self {
                rules,
                retrieval: Some(retrieval),
            },
            Err(e) => {
                warn!(
                    error = %e,
                    "retrieval responder unavailable, using rule-based responses only"
                );
                Self {
                    rules,
                    retrieval: None,
                }
            }
        }
    }

    pub fn has_retrieval(&self) -> bool {
        self.retrieval.is_some()
    }

    /// Answer a care-plan query and append the exchange to `history`.
    ///
    /// A blank query is rejected before anything is appended. On success
    /// exactly two entries are added: the user turn, then the reply.
    pub fn respond(
        &mut self,
        query: &str,
        risk_score: Option<RiskScore>,
        history: &mut ConversationHistory,
    ) -> Result<String, DialogueError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DialogueError::EmptyQuery);
        }

        debug!(risk_score = risk_score.map(|s| s.value()), "care-plan query");

        let reply = match &self.retrieval {
            Some(retrieval) => match retrieval.answer(query) {
                Ok(Some(passage)) => passage,
                Ok(None) => self.rules.reply(query),
                Err(e) => {
                    warn!(error = %e, "retrieval lookup failed, using rule-based response");
                    self.rules.reply(query)
                }
            },
            None => self.rules.reply(query),
        };

        history.push(ChatRole::User, query);
        history.push(ChatRole::Assistant, reply.clone());
        Ok(reply)
    }
}
