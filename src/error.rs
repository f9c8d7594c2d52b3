//! Error types for signetchain

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ChainError {
    /// The submitted signature does not verify against the transaction's
    /// declared originator. This is the routine rejection path: the ledger
    /// is left exactly as it was.
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// A key argument is not a structurally valid key encoding. Indicates a
    /// programmer or setup error and propagates as a hard failure.
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    /// The transaction itself is unacceptable, e.g. the claimed signer is
    /// not the transaction's payer.
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    /// A block's predecessor hash does not match the recomputed hash of the
    /// block before it.
    #[error("Invalid block linkage: {0}")]
    InvalidBlockLinkage(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
