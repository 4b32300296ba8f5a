//! Conversation session control
//!
//! The controller cycles between Idle and Awaiting: an accepted submission
//! echoes the user turn immediately, holds the busy flag through exactly
//! one transport call plus the settling delay, and always lands exactly one
//! assistant turn, reply or fallback, before going idle again.

mod controller;
mod guard;

pub use controller::{ChatSession, SubmitError, FALLBACK_REPLY, SETTLE_DELAY};
