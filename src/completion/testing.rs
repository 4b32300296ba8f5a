//! Mock completion clients for tests
//!
//! Deterministic stand-ins for the HTTP client: queued outcomes, recorded
//! requests, and a gated variant that parks each call until the test
//! releases it, for asserting mid-flight state.

use super::types::{ChatChoice, ChatRequest, ChatResponse, ReplyMessage};
use super::{CompletionClient, CompletionError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Build a one-choice response carrying `text`.
pub fn reply(text: impl Into<String>) -> ChatResponse {
    ChatResponse {
        choices: vec![ChatChoice {
            message: ReplyMessage {
                content: Some(text.into()),
            },
        }],
    }
}

// ============================================================================
// Mock Completion Client
// ============================================================================

/// Mock client that returns queued outcomes in order
pub struct MockCompletionClient {
    outcomes: Mutex<VecDeque<Result<ChatResponse, CompletionError>>>,
    /// Record of all requests made
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response
    pub fn queue_response(&self, response: ChatResponse) {
        self.outcomes.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a successful one-choice reply
    pub fn queue_reply(&self, text: impl Into<String>) {
        self.queue_response(reply(text));
    }

    /// Queue an error outcome
    pub fn queue_error(&self, error: CompletionError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::network("no mock outcome queued")))
    }
}

// ============================================================================
// Gated Mock Completion Client
// ============================================================================

/// Mock client that parks each request until the test releases it
pub struct GatedCompletionClient {
    inner: MockCompletionClient,
    /// Notified (with a buffered permit) when a request arrives
    pub request_started: Arc<Notify>,
    /// Signalled by the test to let the pending request resolve
    pub release: Arc<Notify>,
}

impl GatedCompletionClient {
    pub fn new() -> Self {
        Self {
            inner: MockCompletionClient::new(),
            request_started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    pub fn queue_reply(&self, text: impl Into<String>) {
        self.inner.queue_reply(text);
    }

    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.inner.recorded_requests()
    }
}

impl Default for GatedCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for GatedCompletionClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        self.inner.requests.lock().unwrap().push(request.clone());
        self.request_started.notify_one();
        self.release.notified().await;
        self.inner
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::network("no mock outcome queued")))
    }
}
