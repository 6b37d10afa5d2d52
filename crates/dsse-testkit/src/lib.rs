//! # DSSE Testkit
//!
//! Testing utilities for DSSE envelopes.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Mock providers with call counters, for asserting which
//!   providers the verification loop consulted
//! - **Generators**: Proptest strategies for property-based testing
//! - **Golden vectors**: Known PAE encodings and seeded Ed25519 envelopes
//!
//! ## Fixtures
//!
//! ```rust
//! use dsse_testkit::fixtures::{signer_of, MockProvider};
//!
//! let a = MockProvider::echo("a");
//! let b = MockProvider::echo("b");
//! let signer = signer_of(&[a.clone(), b.clone()]);
//!
//! let envelope = signer.sign_payload("text/plain", b"hi").unwrap();
//! signer.verify(&envelope).unwrap();
//! assert_eq!(b.verify_calls(), 1);
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use dsse_testkit::generators::{envelope_from_params, EnvelopeParams};
//!
//! proptest! {
//!     #[test]
//!     fn signed_envelopes_verify(params: EnvelopeParams) {
//!         let (signer, envelope) = envelope_from_params(&params);
//!         prop_assert!(signer.verify(&envelope).is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{signer_of, verifier_of, Behavior, MockProvider};
pub use generators::{envelope_from_params, signer_from_params, EnvelopeParams};
pub use vectors::{
    envelope_vectors, pae_vectors, public_key_hex, verify_pae_vectors, verify_public_keys,
    EnvelopeVector, PaeVector, RFC8032_TEST1_SEED,
};
