//! The Idle/Awaiting controller around one conversation

use super::guard::BusyGuard;
use crate::completion::CompletionClient;
use crate::conversation::{Conversation, Turn};
use crate::policy::Policy;
use crate::request::RequestBuilder;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

/// Pause between transport resolution and the assistant append, so replies
/// do not land with machine-feeling immediacy.
pub const SETTLE_DELAY: Duration = Duration::from_millis(800);

/// Reply appended when a request fails. The user never sees a raw error.
pub const FALLBACK_REPLY: &str =
    "Desculpe, ocorreu um erro ao processar sua mensagem. Por favor, tente novamente.";

/// Submission rejected by the entry guard.
///
/// Nothing changed and nothing was sent; host UIs ignore these silently.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Trimmed input buffer is empty
    #[error("input is empty")]
    EmptyInput,
    /// A request is already awaiting its reply
    #[error("a request is already in flight")]
    Busy,
}

/// One user's chat session: the transcript, the draft input, and the busy
/// flag, driven round after round by [`submit`](ChatSession::submit).
///
/// All methods take `&self` so a host can hold the session behind an `Arc`
/// and call in from wherever its UI events arrive; the submit guard is the
/// only concurrency control a session needs.
pub struct ChatSession {
    conversation: Mutex<Conversation>,
    input: Mutex<String>,
    busy: AtomicBool,
    builder: RequestBuilder,
    client: Box<dyn CompletionClient>,
    settle_delay: Duration,
}

impl ChatSession {
    /// A new idle session seeded with the greeting turn.
    pub fn new(
        policy: Policy,
        model: impl Into<String>,
        client: impl CompletionClient + 'static,
    ) -> Self {
        Self {
            conversation: Mutex::new(Conversation::seeded()),
            input: Mutex::new(String::new()),
            busy: AtomicBool::new(false),
            builder: RequestBuilder::new(policy, model),
            client: Box::new(client),
            settle_delay: SETTLE_DELAY,
        }
    }

    /// Override the settling delay. Tests run with zero or small values.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Replace the draft input. Host UIs send the whole field value on
    /// every edit.
    pub fn set_input(&self, text: impl Into<String>) {
        *self.lock_input() = text.into();
    }

    /// Current draft input.
    pub fn input(&self) -> String {
        self.lock_input().clone()
    }

    /// Whether a request is outstanding. Source of the typing indicator.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Transcript copy in display order.
    pub fn turns(&self) -> Vec<Turn> {
        self.lock_conversation().turns().to_vec()
    }

    /// Submit the draft input as a user turn and drive the exchange to its
    /// reply.
    ///
    /// Phase one, synchronous: guard check, optimistic append of the user
    /// turn, input cleared. Phase two, asynchronous: one transport call,
    /// then the settling delay, then exactly one assistant append (the
    /// reply, or the fallback on any failure). Returns the appended text.
    ///
    /// The turn carries the buffer contents raw; trimming applies only to
    /// the emptiness check.
    pub async fn submit(&self) -> Result<String, SubmitError> {
        let (text, _guard) = {
            let mut input = self.lock_input();
            if input.trim().is_empty() {
                return Err(SubmitError::EmptyInput);
            }
            let guard = BusyGuard::acquire(&self.busy).ok_or(SubmitError::Busy)?;
            (std::mem::take(&mut *input), guard)
        };

        let user_turn = Turn::user(text);
        let request = {
            let mut conversation = self.lock_conversation();
            let history = conversation.snapshot_for_request();
            conversation.append(user_turn.clone());
            self.builder.build(&history, &user_turn)
        };

        let outcome = self.client.complete(&request).await;
        sleep(self.settle_delay).await;

        let reply = match outcome {
            Ok(response) => match response.first_reply() {
                Some(reply) => reply.to_string(),
                None => {
                    tracing::warn!("completion response carried no usable choice");
                    FALLBACK_REPLY.to_string()
                }
            },
            Err(e) => {
                tracing::warn!(kind = ?e.kind, error = %e, "completion failed, appending fallback");
                FALLBACK_REPLY.to_string()
            }
        };

        self.lock_conversation().append(Turn::assistant(reply.clone()));
        Ok(reply)
    }

    fn lock_conversation(&self) -> MutexGuard<'_, Conversation> {
        self.conversation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_input(&self) -> MutexGuard<'_, String> {
        self.input.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
