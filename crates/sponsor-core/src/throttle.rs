//! Trailing-edge coalescing of high-frequency events.
//!
//! The first request in a burst arms a timer; requests that arrive while it
//! is armed are absorbed. When the timer fires the work runs once against the
//! state current at that moment, so the final position is never dropped.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct Coalescer {
    pending: Cell<bool>,
    absorbed: Cell<u32>,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller must schedule the deferred run.
    pub fn request(&self) -> bool {
        if self.pending.get() {
            self.absorbed.set(self.absorbed.get().saturating_add(1));
            return false;
        }
        self.pending.set(true);
        true
    }

    /// Called by the deferred run before doing its work; returns how many
    /// requests were folded into it.
    pub fn fire(&self) -> u32 {
        self.pending.set(false);
        self.absorbed.replace(0) + 1
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
