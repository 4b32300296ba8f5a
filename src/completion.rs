//! Chat-completion transport abstraction
//!
//! A trait seam over the OpenAI-compatible completions endpoint, so the
//! session controller can run against the production HTTP client or
//! deterministic test doubles.

mod error;
mod http;
mod types;

#[cfg(test)]
pub mod testing;

pub use error::{CompletionError, CompletionErrorKind};
pub use http::HttpCompletionClient;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Client for a single request/response completion call.
///
/// One outbound call, one parsed response or one classified error. No
/// retries and no streaming live behind this seam.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one chat-completion request and await its parsed response.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError>;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        (**self).complete(request).await
    }
}

/// Logging wrapper for completion clients
pub struct LoggingClient {
    inner: Arc<dyn CompletionClient>,
}

impl LoggingClient {
    pub fn new(inner: Arc<dyn CompletionClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CompletionClient for LoggingClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    model = %request.model,
                    duration_ms = %duration.as_millis(),
                    choices = response.choices.len(),
                    "completion request finished"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %request.model,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "completion request failed"
                );
            }
        }

        result
    }
}
