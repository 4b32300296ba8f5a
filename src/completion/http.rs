//! Production HTTP client for the completions endpoint

use super::types::{ChatRequest, ChatResponse};
use super::{CompletionClient, CompletionError};
use crate::config::WidgetConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Outbound request timeout. The session contract itself carries none, so
/// this bound keeps a dead endpoint from holding the typing state forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// reqwest-backed client POSTing to an OpenAI-compatible endpoint.
///
/// Sends the bearer credential plus the origin (`HTTP-Referer`) and client
/// (`X-Title`) identification headers on every call. Header values come
/// from [`WidgetConfig`] and are never logged.
pub struct HttpCompletionClient {
    client: Client,
    api_url: String,
    api_key: String,
    origin: String,
    title: String,
}

impl HttpCompletionClient {
    pub fn new(config: &WidgetConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            origin: config.origin.clone(),
            title: config.title.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", &self.origin)
            .header("X-Title", &self.title)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::network(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    CompletionError::network(format!("connection failed: {e}"))
                } else {
                    CompletionError::network(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::status(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| CompletionError::shape(format!("undecodable completion body: {e}")))
    }
}
