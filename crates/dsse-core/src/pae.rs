//! Pre-Authentication Encoding (PAE).
//!
//! The bytes a provider signs are never the raw payload. They are:
//!
//! ```text
//! "DSSEv1" SP LEN(type) SP type SP LEN(payload) SP payload
//! ```
//!
//! where `SP` is a single space and `LEN` is the ASCII decimal byte length with
//! no leading zeros. Lengths precede content, so no byte inside the type or the
//! payload can be mistaken for a delimiter.
//!
//! **CRITICAL**: This encoding is FROZEN. Changes break all existing signatures.

/// Version tag that opens every encoding.
pub const PAE_PREFIX: &[u8] = b"DSSEv1";

const SP: u8 = b' ';

/// Encode `(payload_type, payload)` into the message that gets signed.
pub fn encode(payload_type: &str, payload: &[u8]) -> Vec<u8> {
    let type_len = payload_type.len().to_string();
    let payload_len = payload.len().to_string();

    let mut buf = Vec::with_capacity(
        PAE_PREFIX.len() + type_len.len() + payload_type.len() + payload_len.len() + payload.len() + 4,
    );
    buf.extend_from_slice(PAE_PREFIX);
    buf.push(SP);
    buf.extend_from_slice(type_len.as_bytes());
    buf.push(SP);
    buf.extend_from_slice(payload_type.as_bytes());
    buf.push(SP);
    buf.extend_from_slice(payload_len.as_bytes());
    buf.push(SP);
    buf.extend_from_slice(payload);
    buf
}
