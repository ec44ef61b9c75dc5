use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single turn in the care-plan assistant conversation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatRole {
    User,
    Assistant,
}

/// Ordered conversation transcript between the user and the assistant.
///
/// Append-only during a session; a successful assistant exchange always
/// adds the user turn and the reply together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ConversationHistory(Vec<ChatMessage>);

impl ConversationHistory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.0.push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
