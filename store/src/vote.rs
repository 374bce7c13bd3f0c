//! Vote record storage trait.

use crate::record::VoteRecord;
use crate::StoreError;
use urna_types::VoterId;

/// Trait for the append-only vote record store.
///
/// Insertion order is part of the contract: the chain invariant is defined
/// over it, so backends must preserve the order in which records were
/// inserted, independent of any timestamp a record carries.
pub trait VoteStore {
    /// Insert one record, keyed uniquely by voter identity.
    ///
    /// Atomic: the record and its insertion-order entry land together or
    /// not at all. A second record for the same voter yields
    /// [`StoreError::Duplicate`].
    fn insert(&self, record: &VoteRecord) -> Result<(), StoreError>;

    /// Look up the record for a voter identity, if any.
    fn find_by_voter(&self, voter: &VoterId) -> Result<Option<VoteRecord>, StoreError>;

    /// The most recently inserted record (the chain head), if any.
    fn latest(&self) -> Result<Option<VoteRecord>, StoreError>;

    /// All records in insertion order, read as one consistent snapshot.
    fn iter_in_insertion_order(&self) -> Result<Vec<VoteRecord>, StoreError>;

    /// Total number of records in the store.
    fn vote_count(&self) -> Result<u64, StoreError>;

    /// Delete every record. Administrative reset only.
    fn clear(&self) -> Result<(), StoreError>;
}
