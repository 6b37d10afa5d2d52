//! # DSSE
//!
//! Dead Simple Signing Envelope: sign an arbitrary payload together with its
//! declared type, with one or more keys, and verify it against a set of
//! registered key-holders.
//!
//! ## Overview
//!
//! - **PAE**: the payload type and payload are length-framed before signing,
//!   so a signature over one type can never be replayed as another
//! - **Envelope**: base64 payload, payload type, ordered signatures
//! - **Signing**: every registered provider signs, in order
//! - **Verification**: every signature must be accepted by some registered
//!   provider; key ids are hints, never used to skip a provider
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use dsse::{Ed25519Signer, EnvelopeSigner, EnvelopeVerifier, SignerVerifier, Verifier};
//!
//! let key = Ed25519Signer::from_seed(&[7u8; 32]);
//! let signer = EnvelopeSigner::new(vec![Arc::new(key.clone()) as Arc<dyn SignerVerifier>]).unwrap();
//!
//! let envelope = signer
//!     .sign_payload("application/vnd.in-toto+json", br#"{"_type":"statement"}"#)
//!     .unwrap();
//! let wire = envelope.to_json().unwrap();
//!
//! // Elsewhere, with only the public key:
//! let verifier = EnvelopeVerifier::new(vec![Arc::new(key.verifier()) as Arc<dyn Verifier>]).unwrap();
//! let received = dsse::Envelope::from_json(wire.as_bytes()).unwrap();
//! verifier.verify(&received).unwrap();
//! ```
//!
//! ## Re-exports
//!
//! - `dsse::core` - Envelope, PAE, codec, signer and verifier
//! - `dsse::ed25519` - Ed25519 providers

pub use dsse_core as core;
pub use dsse_ed25519 as ed25519;

pub use dsse_core::{
    decode_text, encode_text, pae, DsseError, Envelope, EnvelopeSigner, EnvelopeVerifier,
    ProviderError, Result, Signature, SignatureOutcome, SignerAsVerifier, SignerVerifier,
    VerificationReport, Verifier, VerifyOutcome,
};
pub use dsse_ed25519::{Ed25519Error, Ed25519Signer, Ed25519Verifier};
