//! # DSSE Core
//!
//! Pure primitives for the Dead Simple Signing Envelope: pre-authentication
//! encoding, the envelope itself, and multi-provider signing and verification.
//!
//! This crate contains no I/O and implements no signature algorithm. Keys and
//! algorithms are supplied by the caller through the [`Verifier`] and
//! [`SignerVerifier`] traits.
//!
//! ## Key Types
//!
//! - [`Envelope`] - The signed container: payload, payload type, signatures
//! - [`EnvelopeSigner`] - Signs a payload with every registered provider
//! - [`EnvelopeVerifier`] - Checks every signature against every registered provider
//! - [`VerifyOutcome`] - What a provider says about one signature
//!
//! ## Signing
//!
//! What gets signed is never the raw payload but its PAE encoding, which binds
//! the payload type into the signature. See the [`pae`] module.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dsse_core::{EnvelopeSigner, SignerVerifier};
//!
//! let signer = EnvelopeSigner::new(vec![Arc::new(my_provider) as Arc<dyn SignerVerifier>])?;
//! let envelope = signer.sign_payload("application/vnd.in-toto+json", b"{}")?;
//! signer.verify(&envelope)?;
//! ```

pub mod codec;
pub mod envelope;
pub mod error;
pub mod pae;
pub mod provider;
pub mod signer;
pub mod verifier;

pub use codec::{decode_text, encode_text};
pub use envelope::{Envelope, Signature};
pub use error::{DsseError, Result};
pub use provider::{ProviderError, SignerAsVerifier, SignerVerifier, Verifier, VerifyOutcome};
pub use signer::EnvelopeSigner;
pub use verifier::{EnvelopeVerifier, SignatureOutcome, VerificationReport};
