use thiserror::Error;
use urna_crypto::EncodingError;
use urna_store::StoreError;
use urna_types::VoterId;

#[derive(Debug, Error)]
pub enum VoteError {
    #[error("voting is not active")]
    VotingInactive,

    #[error("voter {0} has already cast a ballot")]
    AlreadyVoted(VoterId),

    #[error("ballot encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
