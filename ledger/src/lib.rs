//! Hash-chained vote ledger.
//!
//! One global append-only chain: each committed ballot carries the digest of
//! its predecessor, so any later modification of a past vote is detectable
//! by recomputation. Single-writer, single-process; consensus, forks and
//! proof-of-work are explicitly out of scope.

pub mod block;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod stats;

pub use block::VoteBlock;
pub use error::VoteError;
pub use genesis::GENESIS_PREVIOUS;
pub use ledger::VoteLedger;
pub use stats::VotingStats;
