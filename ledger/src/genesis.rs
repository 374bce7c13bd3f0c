//! Genesis sentinel — the fixed "previous hash" of the very first record.
//!
//! There is no genesis block to store: the first ballot simply points at
//! the all-zero hash. A record is first in the chain iff its
//! `previous_hash` equals this sentinel.

use urna_types::BlockHash;

/// The predecessor hash used by the first record in the ledger.
pub const GENESIS_PREVIOUS: BlockHash = BlockHash::ZERO;
