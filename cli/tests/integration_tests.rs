//! Integration tests exercising the full vote pipeline:
//! cast → LMDB persistence → chain audit → winner resolution.
//!
//! These tests wire together components that are normally only connected
//! inside the CLI, verifying the system works end-to-end — not just in
//! isolation.

use std::sync::Arc;
use urna_audit::{resolve_winner, ChainAuditor, TallyOutcome};
use urna_crypto::hash_ballot;
use urna_ledger::{VoteError, VoteLedger, GENESIS_PREVIOUS};
use urna_store::{MetaStore, VoteStore};
use urna_store_lmdb::LmdbVoteStore;
use urna_types::{CandidateId, VoteTransaction, VoterId};

fn temp_ledger() -> (tempfile::TempDir, VoteLedger<LmdbVoteStore>) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = LmdbVoteStore::open(dir.path()).expect("open store");
    let ledger = VoteLedger::new(store);
    ledger.set_voting_active(true);
    (dir, ledger)
}

#[test]
fn cast_audit_tally_end_to_end() {
    let (_dir, ledger) = temp_ledger();
    ledger.cast_vote("v1", "Alice", "X").unwrap();
    ledger.cast_vote("v2", "Bob", "Y").unwrap();
    ledger.cast_vote("v3", "Carol", "X").unwrap();

    let report = ChainAuditor::verify_and_tally(ledger.store()).unwrap();
    assert!(report.is_intact());
    assert_eq!(report.valid_prefix_len, 3);
    assert_eq!(report.counts[&CandidateId::new("X")], 2);
    assert_eq!(report.counts[&CandidateId::new("Y")], 1);

    assert_eq!(
        resolve_winner(&report.counts),
        TallyOutcome::Winner {
            candidate: CandidateId::new("X"),
            votes: 2
        }
    );
}

#[test]
fn first_receipt_is_reproducible_from_the_sentinel() {
    let (_dir, ledger) = temp_ledger();
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
fn duplicate_vote_is_rejected_durably() {
    let (_dir, ledger) = temp_ledger();
    ledger.cast_vote("v1", "Alice", "X").unwrap();

    let err = ledger.cast_vote("v1", "Alice", "Y").unwrap_err();
    assert!(matches!(err, VoteError::AlreadyVoted(_)));
    assert_eq!(ledger.vote_count().unwrap(), 1);
    assert!(ledger.has_voted(&VoterId::new("v1")).unwrap());
}

#[test]
fn chain_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let ledger = VoteLedger::new(LmdbVoteStore::open(dir.path()).unwrap());
        ledger.set_voting_active(true);
        ledger.cast_vote("v1", "Alice", "X").unwrap();
        ledger.cast_vote("v2", "Bob", "Y").unwrap();
    }

    let store = LmdbVoteStore::open(dir.path()).unwrap();
    let report = ChainAuditor::verify_and_tally(&store).unwrap();
    assert!(report.is_intact());
    assert_eq!(report.valid_prefix_len, 2);

    // The reopened ledger extends the same chain.
    let head = store.latest().unwrap().unwrap().current_hash;
    let ledger = VoteLedger::new(store);
    ledger.set_voting_active(true);
    let third = ledger.cast_vote("v3", "Carol", "X").unwrap();
    assert_eq!(third.previous_hash, head);
}

#[test]
fn voting_flag_round_trips_through_the_store() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = LmdbVoteStore::open(dir.path()).unwrap();
        assert!(!store.voting_active().unwrap());
        store.set_voting_active(true).unwrap();
    }
    let store = LmdbVoteStore::open(dir.path()).unwrap();
    let ledger = VoteLedger::new(store.clone());
    ledger.set_voting_active(store.voting_active().unwrap());
    assert!(ledger.is_voting_active());
}

#[test]
fn concurrent_casts_serialize_on_lmdb() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Arc::new({
        let ledger = VoteLedger::new(LmdbVoteStore::open(dir.path()).unwrap());
        ledger.set_voting_active(true);
        ledger
    });

    let mut handles = Vec::new();
    for i in 0..4 {
        let ledger = Arc::clone(&ledger);
        handles.push(std::thread::spawn(move || {
            ledger
                .cast_vote(format!("v{i}"), format!("Voter {i}"), "X")
                .unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let report = ChainAuditor::verify_and_tally(ledger.store()).unwrap();
    assert!(report.is_intact());
    assert_eq!(report.valid_prefix_len, 4);
    let records = ledger.store().iter_in_insertion_order().unwrap();
    assert_eq!(records.iter().filter(|r| r.is_genesis()).count(), 1);
}

#[test]
fn reset_empties_the_ledger() {
    let (_dir, ledger) = temp_ledger();
    ledger.cast_vote("v1", "Alice", "X").unwrap();
    ledger.reset().unwrap();

    assert_eq!(ledger.vote_count().unwrap(), 0);
    assert!(!ledger.is_voting_active());
    let report = ChainAuditor::verify_and_tally(ledger.store()).unwrap();
    assert_eq!(report.valid_prefix_len, 0);
    assert_eq!(resolve_winner(&report.counts), TallyOutcome::NoVotesYet);
}
