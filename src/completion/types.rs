//! Wire types for the OpenAI-compatible completions endpoint

use crate::conversation::{Speaker, Turn};
use serde::{Deserialize, Serialize};

/// Message role on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One `{role, content}` entry of the outbound message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// System-role entry carrying the policy instructions.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Map a transcript turn onto its wire role.
    pub fn from_turn(turn: &Turn) -> Self {
        let role = match turn.speaker {
            Speaker::User => Role::User,
            Speaker::Assistant => Role::Assistant,
        };
        Self {
            role,
            content: turn.text.clone(),
        }
    }
}

/// Body POSTed to the endpoint: model id plus the ordered message list,
/// nothing else (no sampling parameters, no stream flag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Parsed completion response. Unknown fields are ignored; a missing
/// `choices` array decodes as empty rather than failing, so shape problems
/// surface as an absent first reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ReplyMessage,
}

/// Assistant message inside a choice. `content` can be absent or null.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Reply text of the first completion choice, if the response carries
    /// one. `None` means the response was not usable.
    pub fn first_reply(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}
