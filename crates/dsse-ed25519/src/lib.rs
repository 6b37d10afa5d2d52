//! # DSSE Ed25519
//!
//! Ed25519 providers for [`dsse_core`] envelopes, backed by ed25519-dalek.
//!
//! - [`Ed25519Signer`] holds a signing key and can both sign and verify.
//! - [`Ed25519Verifier`] holds only a public key.
//!
//! Key ids default to the lowercase hex encoding of the public key.

pub mod error;
pub mod provider;

pub use error::{Ed25519Error, Result};
pub use provider::{Ed25519Signer, Ed25519Verifier};
