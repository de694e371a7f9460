//! Chat-style question/answer log for one query session.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Question,
    Answer,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Ordered, append-only transcript. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_question(&mut self, text: impl Into<String>) {
        self.entries.push(ChatMessage { role: Role::Question, text: text.into() });
    }

    /// Append the answer, or the error text shown in its place.
    pub fn push_answer(&mut self, text: impl Into<String>) {
        self.entries.push(ChatMessage { role: Role::Answer, text: text.into() });
    }

    #[must_use]
    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.entries.last()
    }
}
