//! Vote block — one ballot bound to its predecessor.

use serde::{Deserialize, Serialize};
use urna_crypto::{hash_ballot, EncodingError};
use urna_store::VoteRecord;
use urna_types::{BlockHash, Timestamp, VoteTransaction};

/// A block in the vote chain: one transaction plus the hash of its
/// predecessor, from which its own hash is derived.
///
/// The fields are private and the only constructor is [`VoteBlock::build`],
/// which recomputes the hash from `(transaction, previous)` — a block whose
/// hash was assigned rather than computed cannot exist in this type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteBlock {
    transaction: VoteTransaction,
    previous: BlockHash,
    hash: BlockHash,
}

impl VoteBlock {
    /// Build a block for `transaction` chained onto `previous`, deriving
    /// the block hash over the canonical ballot encoding.
    pub fn build(
        transaction: VoteTransaction,
        previous: BlockHash,
    ) -> Result<Self, EncodingError> {
        let hash = hash_ballot(&transaction, &previous)?;
        Ok(Self {
            transaction,
            previous,
            hash,
        })
    }

    pub fn transaction(&self) -> &VoteTransaction {
        &self.transaction
    }

    pub fn previous(&self) -> BlockHash {
        self.previous
    }

    pub fn hash(&self) -> BlockHash {
        self.hash
    }

    /// Convert into the persisted record form, stamped with `timestamp`.
    pub fn into_record(self, timestamp: Timestamp) -> VoteRecord {
        VoteRecord {
            transaction: self.transaction,
            previous_hash: self.previous,
            current_hash: self.hash,
            timestamp,
        }
    }
}
