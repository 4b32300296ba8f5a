//! Widget configuration from environment variables
//!
//! Resolved once at startup. The credential, model id, and endpoint URL are
//! required; the origin and client-title header values fall back to crate
//! defaults. The credential is never logged and is redacted from `Debug`
//! output.

use std::fmt;
use thiserror::Error;

/// Fallback for `CHATDOCK_ORIGIN`.
pub const DEFAULT_ORIGIN: &str = "https://chatdock.local";

/// Fallback for `CHATDOCK_TITLE`.
pub const DEFAULT_TITLE: &str = "Chatdock";

/// Configuration failure at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Resolved settings for one widget instance.
#[derive(Clone)]
pub struct WidgetConfig {
    /// Bearer credential for the completion endpoint.
    pub api_key: String,
    /// Model identifier sent in every request body.
    pub model: String,
    /// Completion endpoint URL.
    pub api_url: String,
    /// Value of the `HTTP-Referer` header.
    pub origin: String,
    /// Value of the `X-Title` header.
    pub title: String,
}

impl WidgetConfig {
    /// Resolve settings from the environment.
    ///
    /// `CHATDOCK_API_KEY`, `CHATDOCK_MODEL`, and `CHATDOCK_API_URL` are
    /// required; a missing one fails construction. `CHATDOCK_ORIGIN` and
    /// `CHATDOCK_TITLE` take crate defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require("CHATDOCK_API_KEY")?,
            model: require("CHATDOCK_MODEL")?,
            api_url: require("CHATDOCK_API_URL")?,
            origin: std::env::var("CHATDOCK_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ORIGIN.to_string()),
            title: std::env::var("CHATDOCK_TITLE")
                .unwrap_or_else(|_| DEFAULT_TITLE.to_string()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

impl fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("origin", &self.origin)
            .field("title", &self.title)
            .finish()
    }
}
