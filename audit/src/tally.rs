//! Winner resolution over verified counts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use urna_types::CandidateId;

/// The resolved election outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyOutcome {
    Winner { candidate: CandidateId, votes: u64 },
    /// No verified ballots exist yet.
    NoVotesYet,
}

/// Pick the winner from verified per-candidate counts.
///
/// The candidate with the strictly highest count wins; equal top counts
/// break to the lexicographically smallest candidate id, so the result is
/// deterministic and stable across calls rather than an accident of map
/// iteration order.
pub fn resolve_winner(counts: &BTreeMap<CandidateId, u64>) -> TallyOutcome {
    let mut best: Option<(&CandidateId, u64)> = None;
    // BTreeMap iterates in ascending key order, so on a tie the earlier
    // (lexicographically smaller) candidate is kept.
    for (candidate, &votes) in counts {
        if votes == 0 {
            continue;
        }
        match best {
            Some((_, best_votes)) if votes <= best_votes => {}
            _ => best = Some((candidate, votes)),
        }
    }
    match best {
        Some((candidate, votes)) => TallyOutcome::Winner {
            candidate: candidate.clone(),
            votes,
        },
        None => TallyOutcome::NoVotesYet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, u64)]) -> BTreeMap<CandidateId, u64> {
        entries
            .iter()
            .map(|(c, n)| (CandidateId::new(*c), *n))
            .collect()
    }

    #[test]
    fn highest_count_wins() {
        let outcome = resolve_winner(&counts(&[("X", 2), ("Y", 1)]));
        assert_eq!(
            outcome,
            TallyOutcome::Winner {
                candidate: CandidateId::new("X"),
                votes: 2
            }
        );
    }

    #[test]
    fn tie_breaks_lexicographically_and_is_stable() {
        let tied = counts(&[("B", 3), ("A", 3)]);
        let first = resolve_winner(&tied);
        for _ in 0..10 {
            assert_eq!(resolve_winner(&tied), first);
        }
        assert_eq!(
            first,
            TallyOutcome::Winner {
                candidate: CandidateId::new("A"),
                votes: 3
            }
        );
    }

    #[test]
    fn empty_counts_yield_no_votes_yet() {
        assert_eq!(resolve_winner(&BTreeMap::new()), TallyOutcome::NoVotesYet);
    }

    #[test]
    fn zero_only_counts_yield_no_votes_yet() {
        assert_eq!(
            resolve_winner(&counts(&[("X", 0), ("Y", 0)])),
            TallyOutcome::NoVotesYet
        );
    }
}
