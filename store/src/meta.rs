//! Metadata storage trait.

use crate::StoreError;

/// Key under which the voting-active flag is persisted.
pub const VOTING_ACTIVE_KEY: &str = "voting_active";

/// Trait for storing ledger metadata (administrative flags, bookkeeping).
///
/// A generic key-value store for state that doesn't belong in the vote
/// chain itself, such as whether voting is currently open.
pub trait MetaStore {
    /// Store a metadata value.
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a metadata value, or `None` if the key was never written.
    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Whether voting is open (convenience wrapper; defaults to `false`
    /// when the flag was never written).
    fn voting_active(&self) -> Result<bool, StoreError> {
        Ok(matches!(
            self.get_meta(VOTING_ACTIVE_KEY)?.as_deref(),
            Some([1])
        ))
    }

    /// Persist the voting-active flag (convenience wrapper).
    fn set_voting_active(&self, active: bool) -> Result<(), StoreError> {
        self.put_meta(VOTING_ACTIVE_KEY, &[u8::from(active)])
    }
}
