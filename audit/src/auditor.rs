//! The chain walk: recompute, compare, stop at the first divergence.

use crate::report::{AuditReport, Divergence, DivergenceReason, TallyAnomaly};
use std::collections::BTreeMap;
use urna_crypto::hash_ballot;
use urna_ledger::GENESIS_PREVIOUS;
use urna_store::{StoreError, VoteStore};
use urna_types::CandidateId;

/// Walks the full ledger and recomputes every block hash from stored fields.
pub struct ChainAuditor;

impl ChainAuditor {
    /// Verify the chain and tally the verified prefix.
    ///
    /// Returns `Err` only for store failures; a divergence is part of the
    /// report. Records are fetched as one consistent snapshot in insertion
    /// order.
    pub fn verify_and_tally<S: VoteStore>(store: &S) -> Result<AuditReport, StoreError> {
        let records = store.iter_in_insertion_order()?;

        let mut expected_previous = GENESIS_PREVIOUS;
        let mut counts: BTreeMap<CandidateId, u64> = BTreeMap::new();
        let mut total_verified = 0u64;
        let mut first_divergence = None;

        for (index, record) in records.iter().enumerate() {
            let reason = if record.previous_hash != expected_previous {
                Some(DivergenceReason::BrokenLink {
                    expected: expected_previous,
                    stored: record.previous_hash,
                })
            } else {
                match hash_ballot(&record.transaction, &record.previous_hash) {
                    Ok(recomputed) if recomputed == record.current_hash => None,
                    Ok(recomputed) => Some(DivergenceReason::HashMismatch {
                        recomputed,
                        stored: record.current_hash,
                    }),
                    Err(err) => Some(DivergenceReason::Unencodable {
                        detail: err.to_string(),
                    }),
                }
            };

            if let Some(reason) = reason {
                tracing::warn!(index, ?reason, "chain divergence detected");
                first_divergence = Some(Divergence { index, reason });
                break;
            }

            *counts.entry(record.candidate().clone()).or_default() += 1;
            total_verified += 1;
            expected_previous = record.current_hash;
        }

        Ok(AuditReport {
            valid_prefix_len: total_verified as usize,
            first_divergence,
            counts,
            total_verified,
        })
    }

    /// Compare raw stored counters against the verified tally.
    ///
    /// Returns one anomaly per candidate where they disagree. The verified
    /// counts stay authoritative regardless of which figure is larger.
    pub fn cross_check(
        report: &AuditReport,
        raw_counts: &BTreeMap<CandidateId, u64>,
    ) -> Vec<TallyAnomaly> {
        let mut anomalies = Vec::new();
        let candidates: std::collections::BTreeSet<&CandidateId> =
            report.counts.keys().chain(raw_counts.keys()).collect();
        for candidate in candidates {
            let raw = raw_counts.get(candidate).copied().unwrap_or(0);
            let verified = report.counts.get(candidate).copied().unwrap_or(0);
            if raw != verified {
                anomalies.push(TallyAnomaly {
                    candidate: candidate.clone(),
                    raw,
                    verified,
                });
            }
        }
        anomalies
    }
}
