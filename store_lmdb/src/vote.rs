//! `VoteStore` and `MetaStore` implementations over LMDB.

use crate::environment::{LmdbEnvironment, DEFAULT_MAP_SIZE};
use crate::error::{map_heed, LmdbError};
use std::path::Path;
use urna_store::{MetaStore, StoreError, VoteRecord, VoteStore};
use urna_types::VoterId;

/// Durable vote store backed by LMDB.
#[derive(Clone)]
pub struct LmdbVoteStore {
    env: LmdbEnvironment,
}

impl LmdbVoteStore {
    /// Open or create a vote store under `path` with the default map size.
    pub fn open(path: &Path) -> Result<Self, LmdbError> {
        Self::open_with_map_size(path, DEFAULT_MAP_SIZE)
    }

    pub fn open_with_map_size(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        Ok(Self {
            env: LmdbEnvironment::open(path, map_size)?,
        })
    }
}

impl VoteStore for LmdbVoteStore {
    fn insert(&self, record: &VoteRecord) -> Result<(), StoreError> {
        let env = &self.env;
        let mut wtxn = env.env.write_txn().map_err(map_heed)?;
        let voter = record.voter().as_str();

        if env.votes.get(&wtxn, voter).map_err(map_heed)?.is_some() {
            return Err(StoreError::Duplicate(voter.to_owned()));
        }

        let next_seq = match env.chain.last(&wtxn).map_err(map_heed)? {
            Some((seq, _)) => seq + 1,
            None => 0,
        };
        env.chain
            .put(&mut wtxn, &next_seq, voter)
            .map_err(map_heed)?;
        env.votes.put(&mut wtxn, voter, record).map_err(map_heed)?;
        wtxn.commit().map_err(map_heed)?;

        tracing::debug!(voter, seq = next_seq, "vote record inserted");
        Ok(())
    }

    fn find_by_voter(&self, voter: &VoterId) -> Result<Option<VoteRecord>, StoreError> {
        let rtxn = self.env.env.read_txn().map_err(map_heed)?;
        self.env.votes.get(&rtxn, voter.as_str()).map_err(map_heed)
    }

    fn latest(&self) -> Result<Option<VoteRecord>, StoreError> {
        let rtxn = self.env.env.read_txn().map_err(map_heed)?;
        let Some((seq, voter)) = self.env.chain.last(&rtxn).map_err(map_heed)? else {
            return Ok(None);
        };
        match self.env.votes.get(&rtxn, voter).map_err(map_heed)? {
            Some(record) => Ok(Some(record)),
            None => Err(StoreError::Corruption(format!(
                "chain entry {seq} points at missing voter record {voter}"
            ))),
        }
    }

    fn iter_in_insertion_order(&self) -> Result<Vec<VoteRecord>, StoreError> {
        // One read transaction = one consistent snapshot.
        let rtxn = self.env.env.read_txn().map_err(map_heed)?;
        let mut records = Vec::new();
        for entry in self.env.chain.iter(&rtxn).map_err(map_heed)? {
            let (seq, voter) = entry.map_err(map_heed)?;
            match self.env.votes.get(&rtxn, voter).map_err(map_heed)? {
                Some(record) => records.push(record),
                None => {
                    return Err(StoreError::Corruption(format!(
                        "chain entry {seq} points at missing voter record {voter}"
                    )))
                }
            }
        }
        Ok(records)
    }

    fn vote_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env.env.read_txn().map_err(map_heed)?;
        self.env.votes.len(&rtxn).map_err(map_heed)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut wtxn = self.env.env.write_txn().map_err(map_heed)?;
        self.env.votes.clear(&mut wtxn).map_err(map_heed)?;
        self.env.chain.clear(&mut wtxn).map_err(map_heed)?;
        wtxn.commit().map_err(map_heed)?;
        tracing::info!("vote store cleared");
        Ok(())
    }
}

impl MetaStore for LmdbVoteStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut wtxn = self.env.env.write_txn().map_err(map_heed)?;
        self.env.meta.put(&mut wtxn, key, value).map_err(map_heed)?;
        wtxn.commit().map_err(map_heed)
    }

    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let rtxn = self.env.env.read_txn().map_err(map_heed)?;
        Ok(self
            .env
            .meta
            .get(&rtxn, key)
            .map_err(map_heed)?
            .map(<[u8]>::to_vec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urna_types::{BlockHash, Timestamp, VoteTransaction};

    fn temp_store() -> (tempfile::TempDir, LmdbVoteStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = LmdbVoteStore::open(dir.path()).expect("open store");
        (dir, store)
    }

    fn record(voter: &str, candidate: &str, previous: BlockHash, seq: u8) -> VoteRecord {
        VoteRecord {
            transaction: VoteTransaction::new(voter, format!("Voter {voter}"), candidate),
            previous_hash: previous,
            current_hash: BlockHash::new([seq; 32]),
            timestamp: Timestamp::new(1000 + u64::from(seq)),
        }
    }

    #[test]
    fn insert_and_find_roundtrip() {
        let (_dir, store) = temp_store();
        let rec = record("v1", "X", BlockHash::ZERO, 1);
        store.insert(&rec).unwrap();

        let found = store.find_by_voter(&VoterId::new("v1")).unwrap();
        assert_eq!(found, Some(rec));
        assert!(store.find_by_voter(&VoterId::new("v2")).unwrap().is_none());
    }

    #[test]
    fn duplicate_voter_rejected_and_order_unchanged() {
        let (_dir, store) = temp_store();
        store.insert(&record("v1", "X", BlockHash::ZERO, 1)).unwrap();

        let err = store
            .insert(&record("v1", "Y", BlockHash::new([1; 32]), 2))
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
        assert_eq!(store.vote_count().unwrap(), 1);
        assert_eq!(store.iter_in_insertion_order().unwrap().len(), 1);
    }

    #[test]
    fn latest_tracks_insertion_order() {
        let (_dir, store) = temp_store();
        assert!(store.latest().unwrap().is_none());

        let first = record("v1", "X", BlockHash::ZERO, 1);
        let second = record("v2", "Y", first.current_hash, 2);
        store.insert(&first).unwrap();
        store.insert(&second).unwrap();

        assert_eq!(store.latest().unwrap(), Some(second.clone()));
        assert_eq!(store.iter_in_insertion_order().unwrap(), vec![first, second]);
    }

    #[test]
    fn clear_removes_records_but_keeps_meta() {
        let (_dir, store) = temp_store();
        store.insert(&record("v1", "X", BlockHash::ZERO, 1)).unwrap();
        store.set_voting_active(true).unwrap();

        store.clear().unwrap();
        assert_eq!(store.vote_count().unwrap(), 0);
        assert!(store.latest().unwrap().is_none());
        assert!(store.voting_active().unwrap());
    }

    #[test]
    fn voting_flag_defaults_to_inactive_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = LmdbVoteStore::open(dir.path()).unwrap();
            assert!(!store.voting_active().unwrap());
            store.set_voting_active(true).unwrap();
        }
        let reopened = LmdbVoteStore::open(dir.path()).unwrap();
        assert!(reopened.voting_active().unwrap());
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let rec = record("v1", "X", BlockHash::ZERO, 1);
        {
            let store = LmdbVoteStore::open(dir.path()).unwrap();
            store.insert(&rec).unwrap();
        }
        let reopened = LmdbVoteStore::open(dir.path()).unwrap();
        assert_eq!(reopened.latest().unwrap(), Some(rec));
    }
}
