//! Cryptographic primitives for the urna vote ledger.
//!
//! - **Blake2b-256** for block hashes
//! - Canonical, length-prefixed ballot encoding so no two distinct
//!   transactions can serialize to the same byte string

pub mod ballot;
pub mod hash;

pub use ballot::{encode_ballot, hash_ballot, EncodingError};
pub use hash::{blake2b_256, blake2b_256_multi};
