use thiserror::Error;
use urna_store::StoreError;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("lmdb error: {0}")]
    Heed(#[from] heed::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map a heed error onto the backend-agnostic store taxonomy.
pub(crate) fn map_heed(err: heed::Error) -> StoreError {
    match err {
        heed::Error::Encoding(_) | heed::Error::Decoding(_) => {
            StoreError::Serialization(err.to_string())
        }
        other => StoreError::Backend(other.to_string()),
    }
}
