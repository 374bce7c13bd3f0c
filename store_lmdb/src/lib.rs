//! LMDB storage backend for the urna vote ledger.
//!
//! Implements the storage traits from `urna-store` using the `heed` LMDB
//! bindings. Three databases live in a single environment: `votes` (voter
//! id → record), `chain` (insertion sequence → voter id) and `meta`
//! (administrative flags). Every insert touches `votes` and `chain` inside
//! one write transaction, so the insertion order can never drift from the
//! record set.

pub mod environment;
pub mod error;
pub mod vote;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use vote::LmdbVoteStore;
