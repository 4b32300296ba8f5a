//! Completion error types

use thiserror::Error;

/// Completion failure with classification.
///
/// Every kind recovers the same way at the session boundary (fallback
/// reply); the classification only reaches the logs.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CompletionError {
    pub kind: CompletionErrorKind,
    pub message: String,
}

impl CompletionError {
    pub fn new(kind: CompletionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Network, message)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Status, message)
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Shape, message)
    }
}

/// Diagnostic classification of a completion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    /// Connection, DNS, or timeout failure before a response arrived
    Network,
    /// Endpoint answered with a non-success HTTP status
    Status,
    /// Body arrived but did not decode into a completion
    Shape,
}
