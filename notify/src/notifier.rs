//! Notifier trait and the default tracing-backed implementation.

use crate::confirmation::VoteConfirmation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Delivers one confirmation to a voter.
///
/// Implementations carry their own failure channel; the dispatcher logs a
/// delivery error and moves on.
pub trait Notifier: Send + Sync {
    fn deliver(&self, confirmation: &VoteConfirmation) -> Result<(), NotifyError>;
}

/// Logs confirmations via `tracing`. The default delivery channel; actual
/// email/SMS transport belongs to an outer layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn deliver(&self, confirmation: &VoteConfirmation) -> Result<(), NotifyError> {
        tracing::info!(
            voter = %confirmation.voter,
            candidate = %confirmation.candidate,
            receipt = %confirmation.receipt,
            "vote confirmation"
        );
        Ok(())
    }
}
