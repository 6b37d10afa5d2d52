//! Error types for DSSE signing and verification.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors that can occur while building or verifying an envelope.
#[derive(Debug, Error)]
pub enum DsseError {
    /// A signer or verifier was constructed without any provider.
    #[error("no signers")]
    NoSigners,

    /// The envelope carries no signature.
    #[error("no signature found")]
    NoSignature,

    /// No registered provider recognized the claimed key id.
    #[error("unknown key")]
    UnknownKey,

    /// A provider recognized the key id but rejected the signature.
    #[error("verification failed: {0}")]
    VerificationFailed(#[source] ProviderError),

    /// A base64 field could not be decoded with either alphabet.
    #[error("illegal base64 data at input byte {offset}: {reason}")]
    CorruptEncoding { offset: usize, reason: String },

    /// An error returned by a provider's sign or key-id operation.
    #[error(transparent)]
    Provider(ProviderError),

    /// Wire format (JSON) error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DsseError {
    /// Whether this is a malformed-base64 failure rather than a signature problem.
    pub fn is_corrupt_encoding(&self) -> bool {
        matches!(self, DsseError::CorruptEncoding { .. })
    }
}

/// Result type for DSSE operations.
pub type Result<T> = std::result::Result<T, DsseError>;
