//! Nullable notifier — records deliveries, optionally fails them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use urna_notify::{Notifier, NotifyError, VoteConfirmation};

/// A notifier that records every confirmation instead of sending anything.
///
/// `fail_deliveries(true)` makes every subsequent delivery return an error,
/// for exercising the dispatcher's soft-failure path.
pub struct NullNotifier {
    delivered: Mutex<Vec<VoteConfirmation>>,
    failing: AtomicBool,
}

impl NullNotifier {
    pub fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail_deliveries(&self, fail: bool) {
        self.failing.store(fail, Ordering::SeqCst);
    }

    /// Confirmations delivered so far, in order.
    pub fn delivered(&self) -> Vec<VoteConfirmation> {
        self.delivered.lock().unwrap().clone()
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NullNotifier {
    fn deliver(&self, confirmation: &VoteConfirmation) -> Result<(), NotifyError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::Delivery("null notifier set to fail".into()));
        }
        self.delivered.lock().unwrap().push(confirmation.clone());
        Ok(())
    }
}
