//! Audit result types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use urna_types::{BlockHash, CandidateId};

/// Why a record failed verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivergenceReason {
    /// The stored `previous_hash` does not match the verified predecessor.
    BrokenLink {
        expected: BlockHash,
        stored: BlockHash,
    },
    /// Recomputing the digest from stored fields gave a different hash.
    HashMismatch {
        recomputed: BlockHash,
        stored: BlockHash,
    },
    /// The stored fields could not be canonically re-encoded at all.
    Unencodable { detail: String },
}

/// The first point where the chain no longer verifies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divergence {
    /// Zero-based position in insertion order.
    pub index: usize,
    pub reason: DivergenceReason,
}

/// Outcome of a full chain walk.
///
/// Everything before `first_divergence` is verified; everything at or after
/// it is excluded from the tally, because a broken link invalidates the
/// provability of every subsequent hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Number of records verified before the walk stopped.
    pub valid_prefix_len: usize,
    /// `None` when the whole chain verifies.
    pub first_divergence: Option<Divergence>,
    /// Verified per-candidate counts, from the valid prefix only.
    pub counts: BTreeMap<CandidateId, u64>,
    /// Total verified ballots (sum of `counts`).
    pub total_verified: u64,
}

impl AuditReport {
    /// Whether the entire stored chain verified.
    pub fn is_intact(&self) -> bool {
        self.first_divergence.is_none()
    }
}

/// Disagreement between a raw stored counter and the verified tally.
///
/// The verified tally is authoritative; an anomaly is reported, never
/// auto-resolved in favor of the larger number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyAnomaly {
    pub candidate: CandidateId,
    pub raw: u64,
    pub verified: u64,
}
