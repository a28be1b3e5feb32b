//! Cancellation
//!
//! Requests cannot be aborted once issued; a view that goes away cancels its
//! token and late results are dropped instead of applied.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Run `apply` unless cancelled. Returns whether it ran.
    pub fn run_unless_cancelled(&self, apply: impl FnOnce()) -> bool {
        if self.is_cancelled() {
            log::debug!("[CANCEL] Dropping late result");
            return false;
        }
        apply();
        true
    }
}
