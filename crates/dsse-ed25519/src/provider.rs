//! Ed25519 signing and verifying providers.
//!
//! Wraps ed25519-dalek keys behind the DSSE provider traits. Signatures are
//! the raw 64-byte Ed25519 signatures over the PAE message.

use std::fmt;

use dsse_core::{ProviderError, SignerVerifier, Verifier, VerifyOutcome};
use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};

use crate::error::{Ed25519Error, Result};

/// Verifies signatures made by one Ed25519 key.
#[derive(Clone)]
pub struct Ed25519Verifier {
    key: VerifyingKey,
    key_id: String,
}

impl Ed25519Verifier {
    /// Create from a dalek verifying key. The key id is the hex public key.
    pub fn new(key: VerifyingKey) -> Self {
        let key_id = hex::encode(key.as_bytes());
        Self { key, key_id }
    }

    /// Create from raw public key bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let key = VerifyingKey::from_bytes(bytes).map_err(|_| Ed25519Error::InvalidPublicKey)?;
        Ok(Self::new(key))
    }

    /// Parse from a hex public key.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| Ed25519Error::InvalidPublicKey)?;
        Self::from_bytes(&arr)
    }

    /// Answer to a different key id.
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = key_id.into();
        self
    }

    /// Get the raw public key bytes.
    pub fn public_key(&self) -> [u8; 32] {
        self.key.to_bytes()
    }

    /// Check a signature, ignoring key ids.
    pub fn check(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let sig = Signature::from_slice(signature)
            .map_err(|_| Ed25519Error::InvalidSignatureLength(signature.len()))?;
        self.key
            .verify(message, &sig)
            .map_err(|_| Ed25519Error::InvalidSignature)
    }
}

impl Verifier for Ed25519Verifier {
    fn verify(&self, key_id: &str, message: &[u8], signature: &[u8]) -> VerifyOutcome {
        if key_id != self.key_id {
            return VerifyOutcome::KeyMismatch;
        }
        match self.check(message, signature) {
            Ok(()) => VerifyOutcome::Verified,
            Err(e) => VerifyOutcome::invalid(e),
        }
    }

    fn key_id(&self) -> std::result::Result<String, ProviderError> {
        Ok(self.key_id.clone())
    }
}

impl fmt::Debug for Ed25519Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Verifier({})", self.key_id)
    }
}

/// Signs with one Ed25519 key. Also verifies its own signatures.
#[derive(Clone)]
pub struct Ed25519Signer {
    signing_key: SigningKey,
    verifier: Ed25519Verifier,
}

impl Ed25519Signer {
    /// Generate a new random key.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self::from_signing_key(SigningKey::generate(&mut rng))
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let verifier = Ed25519Verifier::new(signing_key.verifying_key());
        Self {
            signing_key,
            verifier,
        }
    }

    /// Sign and verify under a different key id.
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.verifier = self.verifier.with_key_id(key_id);
        self
    }

    /// The matching public-key-only provider.
    pub fn verifier(&self) -> Ed25519Verifier {
        self.verifier.clone()
    }

    /// Get the raw public key bytes.
    pub fn public_key(&self) -> [u8; 32] {
        self.verifier.public_key()
    }
}

impl Verifier for Ed25519Signer {
    fn verify(&self, key_id: &str, message: &[u8], signature: &[u8]) -> VerifyOutcome {
        self.verifier.verify(key_id, message, signature)
    }

    fn key_id(&self) -> std::result::Result<String, ProviderError> {
        self.verifier.key_id()
    }
}

impl SignerVerifier for Ed25519Signer {
    fn sign(&self, message: &[u8]) -> std::result::Result<(Vec<u8>, String), ProviderError> {
        let sig = self.signing_key.sign(message);
        Ok((sig.to_bytes().to_vec(), self.verifier.key_id.clone()))
    }
}

impl fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Signer({})", self.verifier.key_id)
    }
}
