//! Golden test vectors for deterministic verification.
//!
//! PAE vectors pin the exact bytes that get signed. Envelope vectors pin the
//! wire form produced by a seeded Ed25519 key; Ed25519 signing is
//! deterministic, so the signature text is stable across runs and platforms.

use std::sync::Arc;

use dsse_core::{pae, Envelope, EnvelopeSigner, SignerVerifier};
use dsse_ed25519::Ed25519Signer;

/// A PAE test vector.
#[derive(Debug, Clone)]
pub struct PaeVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub payload_type: &'static str,
    pub payload: &'static [u8],
    /// Expected encoding.
    pub expected: &'static [u8],
}

/// Get all PAE vectors.
pub fn pae_vectors() -> Vec<PaeVector> {
    vec![
        PaeVector {
            name: "empty type and payload",
            payload_type: "",
            payload: b"",
            expected: b"DSSEv1 0  0 ",
        },
        PaeVector {
            name: "hello world",
            payload_type: "http://example.com/HelloWorld",
            payload: b"hello world",
            expected: b"DSSEv1 29 http://example.com/HelloWorld 11 hello world",
        },
        PaeVector {
            name: "payload with embedded tag",
            payload_type: "t",
            payload: b"DSSEv1 0  0 ",
            expected: b"DSSEv1 1 t 12 DSSEv1 0  0 ",
        },
        PaeVector {
            name: "in-toto statement type",
            payload_type: "application/vnd.in-toto+json",
            payload: b"{}",
            expected: b"DSSEv1 28 application/vnd.in-toto+json 2 {}",
        },
    ]
}

/// Secret key of RFC 8032 section 7.1, TEST 1.
pub const RFC8032_TEST1_SEED: [u8; 32] = [
    0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c, 0xc4,
    0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae, 0x7f, 0x60,
];

/// An envelope vector signed by one seeded Ed25519 key.
#[derive(Debug, Clone)]
pub struct EnvelopeVector {
    pub name: &'static str,
    pub seed: [u8; 32],
    pub key_id: &'static str,
    pub payload_type: &'static str,
    pub payload: &'static [u8],
    /// Expected base64 payload.
    pub expected_payload: &'static str,
    /// Expected public key (hex). Empty means not pinned.
    pub expected_public_key: &'static str,
}

/// Get all envelope vectors.
pub fn envelope_vectors() -> Vec<EnvelopeVector> {
    vec![
        EnvelopeVector {
            name: "hello world",
            seed: [0x42; 32],
            key_id: "test key 123",
            payload_type: "http://example.com/HelloWorld",
            payload: b"hello world",
            expected_payload: "aGVsbG8gd29ybGQ=",
            expected_public_key: "",
        },
        EnvelopeVector {
            name: "empty payload",
            seed: [0x00; 32],
            key_id: "empty",
            payload_type: "",
            payload: b"",
            expected_payload: "",
            expected_public_key: "",
        },
        EnvelopeVector {
            name: "binary payload",
            seed: [0x08; 32],
            key_id: "binary",
            payload_type: "application/octet-stream",
            payload: &[0xfb, 0xff, 0x00, 0x3e],
            expected_payload: "+/8APg==",
            expected_public_key: "",
        },
        EnvelopeVector {
            // RFC 8032 section 7.1, TEST 1 key.
            name: "rfc8032 test key",
            seed: RFC8032_TEST1_SEED,
            key_id: "rfc8032-test-1",
            payload_type: "application/vnd.in-toto+json",
            payload: b"{}",
            expected_payload: "e30=",
            expected_public_key: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        },
    ]
}

/// Build the signer described by a vector.
pub fn signer_from_vector(vector: &EnvelopeVector) -> EnvelopeSigner {
    let provider = Ed25519Signer::from_seed(&vector.seed).with_key_id(vector.key_id);
    EnvelopeSigner::new(vec![Arc::new(provider) as Arc<dyn SignerVerifier>])
        .expect("one provider")
}

/// Sign the envelope described by a vector.
pub fn envelope_from_vector(vector: &EnvelopeVector) -> Envelope {
    signer_from_vector(vector)
        .sign_payload(vector.payload_type, vector.payload)
        .expect("ed25519 signing is infallible")
}

/// Hex public key of the key a vector signs with.
pub fn public_key_hex(vector: &EnvelopeVector) -> String {
    hex::encode(Ed25519Signer::from_seed(&vector.seed).public_key())
}

/// Check every envelope vector's pinned public key, returning
/// `(name, matches, actual hex)` triples.
pub fn verify_public_keys() -> Vec<(String, bool, String)> {
    envelope_vectors()
        .iter()
        .map(|v| {
            let actual = public_key_hex(v);
            let matches = v.expected_public_key.is_empty() || actual == v.expected_public_key;
            (v.name.to_string(), matches, actual)
        })
        .collect()
}

/// Check every PAE vector, returning `(name, matches)` pairs.
pub fn verify_pae_vectors() -> Vec<(String, bool)> {
    pae_vectors()
        .iter()
        .map(|v| {
            let got = pae::encode(v.payload_type, v.payload);
            (v.name.to_string(), got == v.expected)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pae_vectors_match() {
        for (name, ok) in verify_pae_vectors() {
            assert!(ok, "PAE vector {name} does not match");
        }
    }

    #[test]
    fn test_pinned_public_keys_match() {
        for (name, ok, actual) in verify_public_keys() {
            assert!(ok, "vector {name} derived public key {actual}");
        }
    }

    #[test]
    fn test_envelope_vectors_are_deterministic() {
        for vector in envelope_vectors() {
            let e1 = envelope_from_vector(&vector);
            let e2 = envelope_from_vector(&vector);
            assert_eq!(e1, e2, "vector {} not deterministic", vector.name);
            assert_eq!(e1.payload, vector.expected_payload);
            assert_eq!(e1.signatures[0].key_id, vector.key_id);
        }
    }
}
