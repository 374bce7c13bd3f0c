//! Abstract storage traits for the urna vote ledger.
//!
//! Every storage backend (LMDB, in-memory for testing) implements these
//! traits. The rest of the codebase depends only on the traits.

pub mod error;
pub mod meta;
pub mod record;
pub mod vote;

pub use error::StoreError;
pub use meta::MetaStore;
pub use record::VoteRecord;
pub use vote::VoteStore;
