//! LMDB environment setup.

use crate::LmdbError;
use heed::byteorder::BE;
use heed::types::{Bytes, SerdeBincode, Str, U64};
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use urna_store::VoteRecord;

/// Number of named databases in the environment.
const MAX_DBS: u32 = 3;

/// Default map size: 256 MiB, far beyond any realistic single election.
pub const DEFAULT_MAP_SIZE: usize = 256 * 1024 * 1024;

/// Wraps the LMDB environment and all database handles.
#[derive(Clone)]
pub struct LmdbEnvironment {
    pub(crate) env: Env,
    /// Voter id → serialized vote record.
    pub(crate) votes: Database<Str, SerdeBincode<VoteRecord>>,
    /// Insertion sequence (big-endian, so LMDB key order is insertion
    /// order) → voter id.
    pub(crate) chain: Database<U64<BE>, Str>,
    /// Administrative key-value metadata.
    pub(crate) meta: Database<Str, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given path.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;
        // SAFETY: single-process, single-writer usage; heed's environment
        // cache rejects a second concurrent open of the same path.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(MAX_DBS)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let votes = env.create_database(&mut wtxn, Some("votes"))?;
        let chain = env.create_database(&mut wtxn, Some("chain"))?;
        let meta = env.create_database(&mut wtxn, Some("meta"))?;
        wtxn.commit()?;

        tracing::debug!(path = %path.display(), "opened lmdb environment");
        Ok(Self {
            env,
            votes,
            chain,
            meta,
        })
    }
}
