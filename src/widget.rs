//! Widget facade: session plus panel, wired from configuration

use crate::completion::{HttpCompletionClient, LoggingClient};
use crate::config::{ConfigError, WidgetConfig};
use crate::policy::Policy;
use crate::session::ChatSession;
use crate::visibility::Visibility;
use std::sync::Arc;

/// One embedded chat widget: the conversation session and the panel state.
///
/// The two halves are deliberately disjoint; the only place they meet is
/// the typing-indicator projection.
pub struct ChatWidget {
    session: ChatSession,
    panel: Visibility,
}

impl ChatWidget {
    /// Wrap an existing session with a closed panel.
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            panel: Visibility::new(),
        }
    }

    /// Build the production widget: configuration from the environment,
    /// the HTTP client behind the logging wrapper, the default persona.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = WidgetConfig::from_env()?;
        let client = LoggingClient::new(Arc::new(HttpCompletionClient::new(&config)));
        Ok(Self::new(ChatSession::new(
            Policy::default(),
            config.model,
            client,
        )))
    }

    /// The conversation session.
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// The panel visibility state.
    pub fn panel(&self) -> &Visibility {
        &self.panel
    }

    /// Whether the host should render the typing indicator: a pure
    /// projection of `open && busy`, never stored.
    pub fn typing_indicator_visible(&self) -> bool {
        self.panel.is_open() && self.session.is_busy()
    }
}
