//! Raw (non-verified) voting statistics.

use std::collections::BTreeMap;
use urna_types::CandidateId;

/// Per-candidate counts produced by scanning stored records directly,
/// without recomputing any hash.
///
/// These counts are NOT chain-verified: a tampered record still contributes
/// to them. They exist for dashboards and as input to the auditor's
/// cross-check; the chain-derived verified tally is always authoritative,
/// and any disagreement between the two is a reportable anomaly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotingStats {
    /// Total records in the store.
    pub total_votes: u64,
    /// Raw per-candidate counts over all stored records.
    pub votes_by_candidate: BTreeMap<CandidateId, u64>,
    /// Whether voting is currently open.
    pub voting_active: bool,
}
