//! The background confirmation dispatcher.

use crate::confirmation::VoteConfirmation;
use crate::notifier::Notifier;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Bounded queue between the cast path and the delivery worker.
const CHANNEL_CAPACITY: usize = 256;

/// Hands confirmations to a background delivery task without ever blocking.
///
/// Dropping the dispatcher closes the channel; the worker drains what is
/// queued and exits. Awaiting the returned handle gives a clean shutdown.
#[derive(Clone)]
pub struct ConfirmationDispatcher {
    tx: mpsc::Sender<VoteConfirmation>,
}

impl ConfirmationDispatcher {
    /// Spawn the delivery worker on the current tokio runtime.
    pub fn spawn(notifier: Arc<dyn Notifier>) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<VoteConfirmation>(CHANNEL_CAPACITY);
        let handle = tokio::spawn(async move {
            while let Some(confirmation) = rx.recv().await {
                if let Err(err) = notifier.deliver(&confirmation) {
                    tracing::warn!(
                        voter = %confirmation.voter,
                        %err,
                        "confirmation delivery failed"
                    );
                }
            }
        });
        (Self { tx }, handle)
    }

    /// Queue a confirmation. Never blocks: if the queue is full or the
    /// worker is gone, the confirmation is logged and dropped.
    pub fn dispatch(&self, confirmation: VoteConfirmation) {
        if let Err(err) = self.tx.try_send(confirmation) {
            let confirmation = match &err {
                mpsc::error::TrySendError::Full(c) => c,
                mpsc::error::TrySendError::Closed(c) => c,
            };
            tracing::warn!(
                voter = %confirmation.voter,
                "confirmation dropped: {err}"
            );
        }
    }
}
