//! Transcript data model: turns and the append-only conversation
//!
//! A conversation starts with a fixed assistant greeting and grows one turn
//! at a time. Turn text is opaque markup-bearing content: it is stored and
//! handed to the rendering layer byte-for-byte, never parsed or validated
//! here.

use serde::{Deserialize, Serialize};

/// Greeting carried by the first assistant turn of every session.
pub const SEED_GREETING: &str =
    "👋 Olá! Sou o assistente virtual da Trakto. Como posso te ajudar hoje?";

/// Which party produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One message unit in the transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered, append-only transcript for one session.
///
/// Insertion order is chronological order is display order. The first turn
/// is always the seed greeting; nothing is ever removed or reordered.
/// Alternation is deliberately loose: the store never inspects speakers, so
/// adjacent same-speaker turns are representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// A new conversation holding exactly the seed greeting.
    pub fn seeded() -> Self {
        Self {
            turns: vec![Turn::assistant(SEED_GREETING)],
        }
    }

    /// Add a turn at the end.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns in display order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Owned copy of the transcript for request construction.
    ///
    /// Includes every turn, seed first. History is sent whole on every
    /// request; there is no truncation or summarization. Callers composing
    /// a request around a turn that has not been appended yet must take the
    /// snapshot before appending it.
    pub fn snapshot_for_request(&self) -> Vec<Turn> {
        self.turns.clone()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::seeded()
    }
}
