//! The persisted form of a committed vote block.

use serde::{Deserialize, Serialize};
use urna_types::{BlockHash, CandidateId, Timestamp, VoteTransaction, VoterId};

/// One committed ballot as stored in the ledger.
///
/// The full transaction is retained (display name included) so an audit can
/// recompute `current_hash` from stored fields alone. Records are created
/// exactly once, at cast time, and never updated; the only delete path is
/// the administrative full reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// The ballot contents this block commits to.
    pub transaction: VoteTransaction,
    /// `current_hash` of the chronologically preceding record, or the
    /// all-zero genesis sentinel for the first record.
    pub previous_hash: BlockHash,
    /// Digest of `(transaction, previous_hash)`; handed to the voter as
    /// their verification receipt.
    pub current_hash: BlockHash,
    /// Insertion time, stamped by the ledger's clock.
    pub timestamp: Timestamp,
}

impl VoteRecord {
    /// The unique key this record is stored under.
    pub fn voter(&self) -> &VoterId {
        &self.transaction.voter
    }

    /// The candidate this ballot was cast for.
    pub fn candidate(&self) -> &CandidateId {
        &self.transaction.candidate
    }

    /// Whether this record claims to be the first in the chain.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_zero()
    }
}
