//! The vote ledger — eligibility checks, chain extension, atomic commit.

use crate::block::VoteBlock;
use crate::error::VoteError;
use crate::genesis::GENESIS_PREVIOUS;
use crate::stats::VotingStats;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use urna_store::{StoreError, VoteRecord, VoteStore};
use urna_types::{CandidateId, Clock, SystemClock, VoteTransaction, VoterId};

/// Single-writer vote ledger over a [`VoteStore`].
///
/// The append path (read head → build block → insert) runs inside one
/// mutex-guarded critical section: two concurrent casts can never both
/// observe the same head and fork the chain. Reads do not take the lock.
pub struct VoteLedger<S: VoteStore> {
    store: S,
    clock: Arc<dyn Clock>,
    /// Process-wide voting switch. Starts closed; only the administrative
    /// surface flips it.
    voting_active: AtomicBool,
    /// Serializes the whole read-head/compute/insert sequence.
    append_lock: Mutex<()>,
}

impl<S: VoteStore> VoteLedger<S> {
    /// Create a ledger over `store` using the system clock. Voting starts
    /// inactive.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a ledger with an injected clock (deterministic tests).
    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            voting_active: AtomicBool::new(false),
            append_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Administrative: open or close voting.
    pub fn set_voting_active(&self, active: bool) {
        self.voting_active.store(active, Ordering::SeqCst);
        tracing::info!(active, "voting switch changed");
    }

    pub fn is_voting_active(&self) -> bool {
        self.voting_active.load(Ordering::SeqCst)
    }

    /// Record one ballot as the next block in the chain.
    ///
    /// Preconditions, in order, each with its own error: voting must be
    /// active, and the voter must not already have a record. The candidate
    /// is NOT validated against any registry — an unknown candidate enters
    /// the chain and surfaces later as a tally anomaly.
    ///
    /// On success returns the persisted record; its `current_hash` is the
    /// voter's verification receipt. Exactly one durable write per success,
    /// none on any failure path.
    pub fn cast_vote(
        &self,
        voter: impl Into<VoterId>,
        display_name: impl Into<String>,
        candidate: impl Into<CandidateId>,
    ) -> Result<VoteRecord, VoteError> {
        if !self.is_voting_active() {
            return Err(VoteError::VotingInactive);
        }

        let voter = voter.into();
        let _guard = self.append_lock.lock().expect("append lock poisoned");

        if self.store.find_by_voter(&voter)?.is_some() {
            return Err(VoteError::AlreadyVoted(voter));
        }

        let previous = match self.store.latest()? {
            Some(head) => head.current_hash,
            None => GENESIS_PREVIOUS,
        };
        let transaction = VoteTransaction::new(voter, display_name, candidate);
        let block = VoteBlock::build(transaction, previous)?;
        let record = block.into_record(self.clock.now());

        match self.store.insert(&record) {
            Ok(()) => {}
            // The store is the last line of defense for uniqueness; map its
            // duplicate verdict onto the ledger-level error.
            Err(StoreError::Duplicate(_)) => {
                return Err(VoteError::AlreadyVoted(record.transaction.voter))
            }
            Err(other) => return Err(other.into()),
        }

        tracing::info!(
            voter = %record.voter(),
            candidate = %record.candidate(),
            hash = %record.current_hash,
            "ballot committed"
        );
        Ok(record)
    }

    /// Whether this voter already has a record in the ledger.
    pub fn has_voted(&self, voter: &VoterId) -> Result<bool, StoreError> {
        Ok(self.store.find_by_voter(voter)?.is_some())
    }

    pub fn vote_count(&self) -> Result<u64, StoreError> {
        self.store.vote_count()
    }

    /// Raw statistics over stored records; see [`VotingStats`] for why
    /// these are never authoritative.
    pub fn statistics(&self) -> Result<VotingStats, StoreError> {
        let mut votes_by_candidate: BTreeMap<CandidateId, u64> = BTreeMap::new();
        let records = self.store.iter_in_insertion_order()?;
        for record in &records {
            *votes_by_candidate.entry(record.candidate().clone()).or_default() += 1;
        }
        Ok(VotingStats {
            total_votes: records.len() as u64,
            votes_by_candidate,
            voting_active: self.is_voting_active(),
        })
    }

    /// Administrative reset: delete every record and close voting.
    pub fn reset(&self) -> Result<(), VoteError> {
        let _guard = self.append_lock.lock().expect("append lock poisoned");
        self.store.clear()?;
        self.voting_active.store(false, Ordering::SeqCst);
        tracing::warn!("ledger reset: all records deleted, voting closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use urna_crypto::hash_ballot;
    use urna_nullables::{NullClock, NullStore};
    use urna_types::Timestamp;

    fn open_ledger() -> VoteLedger<NullStore> {
        let ledger = VoteLedger::new(NullStore::new());
        ledger.set_voting_active(true);
        ledger
    }

    #[test]
    fn voting_starts_inactive() {
        let ledger = VoteLedger::new(NullStore::new());
        assert!(!ledger.is_voting_active());
        let err = ledger.cast_vote("v1", "Alice", "X").unwrap_err();
        assert!(matches!(err, VoteError::VotingInactive));
        assert_eq!(ledger.vote_count().unwrap(), 0);
    }

    #[test]
    fn first_vote_points_at_genesis_and_receipt_is_reproducible() {
        let ledger = open_ledger();
        let record = ledger.cast_vote("v1", "Alice", "X").unwrap();

        assert_eq!(record.previous_hash, GENESIS_PREVIOUS);
        let expected = hash_ballot(
            &VoteTransaction::new("v1", "Alice", "X"),
            &GENESIS_PREVIOUS,
        )
        .unwrap();
        assert_eq!(record.current_hash, expected);
    }

    #[test]
    fn chain_links_consecutive_records() {
        let ledger = open_ledger();
        ledger.cast_vote("v1", "Alice", "X").unwrap();
        ledger.cast_vote("v2", "Bob", "Y").unwrap();
        ledger.cast_vote("v3", "Carol", "X").unwrap();

        let records = ledger.store().iter_in_insertion_order().unwrap();
        assert_eq!(records.len(), 3);
        let mut expected_previous = GENESIS_PREVIOUS;
        for record in &records {
            assert_eq!(record.previous_hash, expected_previous);
            assert_eq!(
                record.current_hash,
                hash_ballot(&record.transaction, &record.previous_hash).unwrap()
            );
            expected_previous = record.current_hash;
        }
    }

    #[test]
    fn double_vote_rejected_without_write() {
        let ledger = open_ledger();
        ledger.cast_vote("v1", "Alice", "X").unwrap();

        let err = ledger.cast_vote("v1", "Alice", "Y").unwrap_err();
        assert!(matches!(err, VoteError::AlreadyVoted(ref v) if v.as_str() == "v1"));
        assert_eq!(ledger.vote_count().unwrap(), 1);
        // The stored choice is the original one.
        let stored = ledger
            .store()
            .find_by_voter(&VoterId::new("v1"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.candidate().as_str(), "X");
    }

    #[test]
    fn records_stamped_by_injected_clock() {
        let clock = Arc::new(NullClock::new(5_000));
        let ledger = VoteLedger::with_clock(NullStore::new(), clock.clone());
        ledger.set_voting_active(true);

        let first = ledger.cast_vote("v1", "Alice", "X").unwrap();
        clock.advance(60);
        let second = ledger.cast_vote("v2", "Bob", "Y").unwrap();

        assert_eq!(first.timestamp, Timestamp::new(5_000));
        assert_eq!(second.timestamp, Timestamp::new(5_060));
    }

    #[test]
    fn concurrent_casts_never_fork_the_chain() {
        let ledger = Arc::new(open_ledger());
        let mut handles = Vec::new();
        for i in 0..8 {
            let ledger = Arc::clone(&ledger);
            handles.push(thread::spawn(move || {
                ledger
                    .cast_vote(format!("v{i}"), format!("Voter {i}"), "X")
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let records = ledger.store().iter_in_insertion_order().unwrap();
        assert_eq!(records.len(), 8);
        // Exactly one record claims the genesis sentinel, and every link holds.
        assert_eq!(records.iter().filter(|r| r.is_genesis()).count(), 1);
        let mut expected_previous = GENESIS_PREVIOUS;
        for record in &records {
            assert_eq!(record.previous_hash, expected_previous);
            expected_previous = record.current_hash;
        }
    }

    #[test]
    fn statistics_count_raw_candidates() {
        let ledger = open_ledger();
        ledger.cast_vote("v1", "Alice", "X").unwrap();
        ledger.cast_vote("v2", "Bob", "Y").unwrap();
        ledger.cast_vote("v3", "Carol", "X").unwrap();

        let stats = ledger.statistics().unwrap();
        assert_eq!(stats.total_votes, 3);
        assert!(stats.voting_active);
        assert_eq!(stats.votes_by_candidate[&CandidateId::new("X")], 2);
        assert_eq!(stats.votes_by_candidate[&CandidateId::new("Y")], 1);
    }

    #[test]
    fn reset_clears_and_closes() {
        let ledger = open_ledger();
        ledger.cast_vote("v1", "Alice", "X").unwrap();

        ledger.reset().unwrap();
        assert_eq!(ledger.vote_count().unwrap(), 0);
        assert!(!ledger.is_voting_active());
    }
}
