//! Best-effort vote confirmation dispatch.
//!
//! Confirmations are fire-and-forget: they are handed to a background task
//! after the ledger write commits and can never block or fail the cast
//! path. A failed delivery is logged and dropped, never rolled back into
//! the ledger.

pub mod confirmation;
pub mod dispatcher;
pub mod notifier;

pub use confirmation::VoteConfirmation;
pub use dispatcher::ConfirmationDispatcher;
pub use notifier::{Notifier, NotifyError, TracingNotifier};
