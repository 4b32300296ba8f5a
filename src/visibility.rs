//! Panel visibility, disjoint from conversation state

use std::sync::atomic::{AtomicBool, Ordering};

/// Open/closed state of the widget panel.
///
/// Fully independent of the session: closing the panel neither cancels nor
/// pauses an outstanding request, so reopening always shows the completed
/// exchange.
#[derive(Debug, Default)]
pub struct Visibility {
    open: AtomicBool,
}

impl Visibility {
    /// A new panel, closed.
    pub fn new() -> Self {
        Self {
            open: AtomicBool::new(false),
        }
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }

    /// Flip open/closed. Returns the new state.
    pub fn toggle(&self) -> bool {
        !self.open.fetch_xor(true, Ordering::Relaxed)
    }

    /// Force closed.
    pub fn close(&self) {
        self.open.store(false, Ordering::Relaxed);
    }
}
