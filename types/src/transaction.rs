//! The vote transaction tuple.

use crate::{CandidateId, VoterId};
use serde::{Deserialize, Serialize};

/// One ballot: who voted, under what display name, for which candidate.
///
/// Immutable once created. The field order here is the canonical order used
/// by the ballot hash; changing any byte of any field changes the block hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTransaction {
    /// Unique voter identity.
    pub voter: VoterId,
    /// Display name presented at cast time (retained so audits can recompute
    /// the digest from stored fields alone).
    pub display_name: String,
    /// The candidate chosen.
    pub candidate: CandidateId,
}

impl VoteTransaction {
    pub fn new(
        voter: impl Into<VoterId>,
        display_name: impl Into<String>,
        candidate: impl Into<CandidateId>,
    ) -> Self {
        Self {
            voter: voter.into(),
            display_name: display_name.into(),
            candidate: candidate.into(),
        }
    }
}
