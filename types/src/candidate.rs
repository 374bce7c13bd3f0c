//! Candidate identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the candidate (or party) a ballot was cast for.
///
/// The ledger does not validate candidates against a registry; an unknown
/// candidate is recorded as-is and surfaces later as a tally anomaly, not
/// as a cast failure. `Ord` so tallies can live in ordered maps with
/// deterministic iteration.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CandidateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
