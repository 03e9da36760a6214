//! Cooperative cancellation shared with the Ctrl-C handler

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Flag observed by the poll loop between polls
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Cancel this token when the process receives Ctrl-C
    pub fn cancel_on_ctrl_c(&self) -> Result<(), ctrlc::Error> {
        let token = self.clone();
        ctrlc::set_handler(move || {
            tracing::warn!("interrupt received, stopping after the current poll");
            token.cancel();
        })
    }
}
