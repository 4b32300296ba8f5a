//! Session core for an embeddable support-chat widget.
//!
//! Maintains one linear conversation against an OpenAI-compatible
//! completion endpoint: a seeded transcript, a fixed behavioral policy
//! injected as the system message of every request, an Idle/Awaiting
//! submit loop with optimistic echo and graceful fallback, and the panel
//! visibility toggle. Rendering and event wiring belong to the host; this
//! crate owns the state and the request pipeline.

pub mod completion;
pub mod config;
pub mod conversation;
pub mod policy;
pub mod request;
pub mod session;
pub mod visibility;
pub mod widget;

pub use completion::{
    ChatMessage, ChatRequest, ChatResponse, CompletionClient, CompletionError,
    CompletionErrorKind, HttpCompletionClient, LoggingClient, Role,
};
pub use config::{ConfigError, WidgetConfig};
pub use conversation::{Conversation, Speaker, Turn, SEED_GREETING};
pub use policy::Policy;
pub use request::RequestBuilder;
pub use session::{ChatSession, SubmitError, FALLBACK_REPLY, SETTLE_DELAY};
pub use visibility::Visibility;
pub use widget::ChatWidget;
