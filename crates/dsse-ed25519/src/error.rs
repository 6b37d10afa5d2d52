//! Error types for the Ed25519 provider.

use thiserror::Error;

/// Errors raised while loading keys or checking signatures.
#[derive(Debug, Error)]
pub enum Ed25519Error {
    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("ed25519 verification failed")]
    InvalidSignature,

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Result type for Ed25519 provider operations.
pub type Result<T> = std::result::Result<T, Ed25519Error>;
