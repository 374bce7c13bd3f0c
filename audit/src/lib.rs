//! Chain-integrity verification and verified tallying.
//!
//! The auditor walks the stored ledger, recomputes every block digest from
//! stored fields, stops at the first divergence and tallies only the
//! verified prefix. A divergence is a result, never an error: corrupted
//! history must surface, not be repaired or papered over.

pub mod auditor;
pub mod report;
pub mod tally;

pub use auditor::ChainAuditor;
pub use report::{AuditReport, Divergence, DivergenceReason, TallyAnomaly};
pub use tally::{resolve_winner, TallyOutcome};
