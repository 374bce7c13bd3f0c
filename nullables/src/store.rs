//! Nullable store — thread-safe in-memory storage for testing.

use std::sync::Mutex;
use urna_store::{MetaStore, StoreError, VoteRecord, VoteStore};
use urna_types::VoterId;

/// An in-memory vote store for testing.
///
/// Records live in a single `Vec` in insertion order, matching the chain
/// contract. Thread-safe so it can back concurrency tests. The extra
/// [`NullStore::tamper`] hook lets integrity tests mutate committed history,
/// something no real backend exposes.
pub struct NullStore {
    records: Mutex<Vec<VoteRecord>>,
    meta: Mutex<Vec<(String, Vec<u8>)>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            meta: Mutex::new(Vec::new()),
        }
    }

    /// Mutate the committed record at `index` in insertion order.
    ///
    /// Deliberately bypasses every ledger invariant: this is how tests
    /// simulate after-the-fact tampering with stored history.
    pub fn tamper(&self, index: usize, mutate: impl FnOnce(&mut VoteRecord)) {
        let mut records = self.records.lock().unwrap();
        mutate(&mut records[index]);
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteStore for NullStore {
    fn insert(&self, record: &VoteRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.voter() == record.voter()) {
            return Err(StoreError::Duplicate(record.voter().to_string()));
        }
        records.push(record.clone());
        Ok(())
    }

    fn find_by_voter(&self, voter: &VoterId) -> Result<Option<VoteRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.voter() == voter)
            .cloned())
    }

    fn latest(&self) -> Result<Option<VoteRecord>, StoreError> {
        Ok(self.records.lock().unwrap().last().cloned())
    }

    fn iter_in_insertion_order(&self) -> Result<Vec<VoteRecord>, StoreError> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn vote_count(&self) -> Result<u64, StoreError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.records.lock().unwrap().clear();
        Ok(())
    }
}

impl MetaStore for NullStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut meta = self.meta.lock().unwrap();
        if let Some(entry) = meta.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_vec();
        } else {
            meta.push((key.to_owned(), value.to_vec()));
        }
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .meta
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }
}
