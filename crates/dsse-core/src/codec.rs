//! Base64 handling for the envelope's textual fields.
//!
//! Producers disagree on the alphabet: some emit standard base64, some emit
//! the URL-safe variant for the same fields. Decoding accepts both (padded);
//! encoding always uses the standard alphabet.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::{DecodeError, Engine};

use crate::error::{DsseError, Result};

/// Encode bytes with the standard, padded alphabet.
pub fn encode_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a base64 field, trying the standard alphabet first and then the
/// URL-safe one.
///
/// When both fail, the reported offset comes from the URL-safe attempt.
pub fn decode_text(s: &str) -> Result<Vec<u8>> {
    if let Ok(bytes) = STANDARD.decode(s) {
        return Ok(bytes);
    }
    URL_SAFE.decode(s).map_err(|e| corrupt(s, e))
}

fn corrupt(input: &str, err: DecodeError) -> DsseError {
    let offset = match err {
        DecodeError::InvalidByte(offset, _) | DecodeError::InvalidLastSymbol(offset, _) => offset,
        // Length and padding faults are only detectable at the end.
        _ => input.len(),
    };
    DsseError::CorruptEncoding {
        offset,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_bytes() -> Vec<u8> {
        (0u8..=255).collect()
    }

    #[test]
    fn test_standard_alphabet() {
        let standard = STANDARD.encode(all_bytes());
        assert!(standard.contains('+') && standard.contains('/'));
        assert_eq!(decode_text(&standard).unwrap(), all_bytes());
    }

    #[test]
    fn test_url_safe_alphabet() {
        let url = URL_SAFE.encode(all_bytes());
        assert!(url.contains('-') && url.contains('_'));
        assert_eq!(decode_text(&url).unwrap(), all_bytes());
    }

    #[test]
    fn test_missing_padding_fails_both() {
        let standard = STANDARD.encode(all_bytes());
        let url = URL_SAFE.encode(all_bytes());

        assert!(decode_text(standard.trim_end_matches('=')).unwrap_err().is_corrupt_encoding());
        assert!(decode_text(url.trim_end_matches('=')).unwrap_err().is_corrupt_encoding());
    }

    #[test]
    fn test_mixed_alphabets_fail() {
        // '+' is only valid in the standard alphabet, '_' only in URL-safe.
        let err = decode_text("ab+_").unwrap_err();
        assert!(err.is_corrupt_encoding());
    }

    #[test]
    fn test_offset_of_first_invalid_byte() {
        match decode_text("Not base 64") {
            Err(DsseError::CorruptEncoding { offset, .. }) => assert_eq!(offset, 3),
            other => panic!("expected corrupt encoding, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_uses_standard_padded() {
        assert_eq!(encode_text(b"hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(encode_text(&[0xfb, 0xff]), "+/8=");
    }

    proptest! {
        #[test]
        fn test_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(decode_text(&encode_text(&bytes)).unwrap(), bytes.clone());
            prop_assert_eq!(decode_text(&URL_SAFE.encode(&bytes)).unwrap(), bytes);
        }
    }
}
