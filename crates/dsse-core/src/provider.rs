//! Provider traits: the boundary between the envelope logic and key material.
//!
//! The core never touches keys or algorithms. A provider owns one key (or a
//! hardware handle, or a remote signer) and answers sign/verify requests over
//! the PAE-encoded message.

use std::error::Error as StdError;
use std::sync::Arc;

/// Opaque error produced by a provider.
pub type ProviderError = Box<dyn StdError + Send + Sync>;

/// What a provider reports for one `(key_id, message, signature)` triple.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// The signature is valid for the claimed key.
    Verified,
    /// The claimed key id is not one this provider holds. Try the next provider.
    KeyMismatch,
    /// The key id was recognized but the signature did not validate, or the
    /// algorithm itself failed.
    SignatureInvalid(ProviderError),
}

impl VerifyOutcome {
    /// Build a `SignatureInvalid` outcome from anything printable as an error.
    pub fn invalid(err: impl Into<ProviderError>) -> Self {
        VerifyOutcome::SignatureInvalid(err.into())
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, VerifyOutcome::Verified)
    }
}

/// The verification capability.
///
/// Implementations must be safe to call concurrently if the owning
/// [`EnvelopeVerifier`](crate::EnvelopeVerifier) is shared across threads.
pub trait Verifier: Send + Sync {
    /// Check `signature` over `message` for the claimed `key_id`.
    fn verify(&self, key_id: &str, message: &[u8], signature: &[u8]) -> VerifyOutcome;

    /// The key id this provider answers to, if it can report one.
    fn key_id(&self) -> Result<String, ProviderError>;
}

/// The full signing capability. Every signer is also a verifier.
pub trait SignerVerifier: Verifier {
    /// Sign `message`, returning the raw signature bytes and the key id that
    /// produced them.
    fn sign(&self, message: &[u8]) -> Result<(Vec<u8>, String), ProviderError>;
}

/// Exposes a shared signer through the verifier capability alone.
///
/// Lets an `Arc<dyn SignerVerifier>` be registered where an
/// `Arc<dyn Verifier>` is expected.
#[derive(Clone)]
pub struct SignerAsVerifier(pub Arc<dyn SignerVerifier>);

impl SignerAsVerifier {
    /// Wrap `signer` as a shared verifier.
    pub fn shared(signer: Arc<dyn SignerVerifier>) -> Arc<dyn Verifier> {
        Arc::new(Self(signer))
    }
}

impl Verifier for SignerAsVerifier {
    fn verify(&self, key_id: &str, message: &[u8], signature: &[u8]) -> VerifyOutcome {
        self.0.verify(key_id, message, signature)
    }

    fn key_id(&self) -> Result<String, ProviderError> {
        self.0.key_id()
    }
}
