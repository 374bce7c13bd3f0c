//! Fundamental types for the urna vote ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: voter and candidate identifiers, block hashes, timestamps and
//! the vote transaction tuple.

pub mod candidate;
pub mod hash;
pub mod time;
pub mod transaction;
pub mod voter;

pub use candidate::CandidateId;
pub use hash::BlockHash;
pub use time::{Clock, SystemClock, Timestamp};
pub use transaction::VoteTransaction;
pub use voter::VoterId;
