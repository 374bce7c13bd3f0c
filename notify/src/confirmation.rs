//! The confirmation message sent to a voter after commit.

use urna_store::VoteRecord;
use urna_types::{BlockHash, CandidateId, Timestamp, VoterId};

/// Receipt data for one committed ballot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteConfirmation {
    pub voter: VoterId,
    pub display_name: String,
    pub candidate: CandidateId,
    /// The block hash; the voter's verification receipt.
    pub receipt: BlockHash,
    pub timestamp: Timestamp,
}

impl From<&VoteRecord> for VoteConfirmation {
    fn from(record: &VoteRecord) -> Self {
        Self {
            voter: record.voter().clone(),
            display_name: record.transaction.display_name.clone(),
            candidate: record.candidate().clone(),
            receipt: record.current_hash,
            timestamp: record.timestamp,
        }
    }
}
