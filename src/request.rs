//! Outbound request composition
//!
//! Builds the ordered message list for one submission: the policy first as
//! the system entry, then the pre-append history, then the new user turn,
//! exactly once, last.

#[cfg(test)]
mod proptests;

use crate::completion::{ChatMessage, ChatRequest};
use crate::conversation::Turn;
use crate::policy::Policy;

/// Composes completion requests for one widget instance.
///
/// Policy and model id are fixed at construction; each submission only
/// varies the history and the new user turn.
pub struct RequestBuilder {
    policy: Policy,
    model: String,
}

impl RequestBuilder {
    pub fn new(policy: Policy, model: impl Into<String>) -> Self {
        Self {
            policy,
            model: model.into(),
        }
    }

    /// Compose the payload for one submission.
    ///
    /// `history` must be the transcript as of before `user_turn` was
    /// appended; the builder places the turn itself exactly once, last.
    /// Passing a post-append history would duplicate the newest user
    /// message, the one ordering bug this seam exists to prevent.
    pub fn build(&self, history: &[Turn], user_turn: &Turn) -> ChatRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(self.policy.instructions()));
        messages.extend(history.iter().map(ChatMessage::from_turn));
        messages.push(ChatMessage::from_turn(user_turn));

        ChatRequest {
            model: self.model.clone(),
            messages,
        }
    }
}
