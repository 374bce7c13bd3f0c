//! Canonical ballot encoding and the chained block digest.
//!
//! Every block hash covers the full transaction tuple plus the predecessor
//! hash. Fields are encoded in fixed order, each string prefixed with its
//! byte length as a 4-byte big-endian integer, so shifting a boundary
//! between two fields can never produce a colliding serialization
//! (`("ab","c")` and `("a","bc")` encode to different byte strings).

use crate::hash::blake2b_256;
use thiserror::Error;
use urna_types::{BlockHash, VoteTransaction};

/// Failure to canonically encode a ballot field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("field `{field}` is {len} bytes, exceeds the u32 length prefix")]
    FieldTooLong { field: &'static str, len: usize },
}

/// Canonically encode a transaction plus its predecessor hash.
///
/// Layout: `len(voter) voter len(display_name) display_name
/// len(candidate) candidate previous[32]`, lengths in big-endian u32.
pub fn encode_ballot(
    transaction: &VoteTransaction,
    previous: &BlockHash,
) -> Result<Vec<u8>, EncodingError> {
    let fields: [(&'static str, &str); 3] = [
        ("voter", transaction.voter.as_str()),
        ("display_name", &transaction.display_name),
        ("candidate", transaction.candidate.as_str()),
    ];

    let mut buffer = Vec::with_capacity(
        fields.iter().map(|(_, v)| 4 + v.len()).sum::<usize>() + 32,
    );
    for (name, value) in fields {
        let len = u32::try_from(value.len()).map_err(|_| EncodingError::FieldTooLong {
            field: name,
            len: value.len(),
        })?;
        buffer.extend_from_slice(&len.to_be_bytes());
        buffer.extend_from_slice(value.as_bytes());
    }
    buffer.extend_from_slice(previous.as_bytes());
    Ok(buffer)
}

/// Compute the chained block digest for a transaction.
///
/// Deterministic: the same `(transaction, previous)` always yields the same
/// hash, and any single-byte change in any field or in `previous` yields a
/// different hash with overwhelming probability.
pub fn hash_ballot(
    transaction: &VoteTransaction,
    previous: &BlockHash,
) -> Result<BlockHash, EncodingError> {
    let encoded = encode_ballot(transaction, previous)?;
    Ok(BlockHash::new(blake2b_256(&encoded)))
}
