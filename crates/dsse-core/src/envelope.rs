//! The signed envelope and its wire form.
//!
//! Both the payload and the signatures travel as base64 text. The JSON field
//! names follow the DSSE protocol: `payload`, `payloadType`, `signatures`,
//! and `keyid` / `sig` per signature.

use serde::{Deserialize, Serialize};

use crate::codec::decode_text;
use crate::error::{DsseError, Result};

/// One signature over the PAE of an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Routing hint naming the key that produced the signature. Unauthenticated.
    #[serde(rename = "keyid", alias = "keyID", default)]
    pub key_id: String,

    /// Signature bytes, base64.
    #[serde(default)]
    pub sig: String,
}

impl Signature {
    /// Decode the signature bytes.
    pub fn decode_sig(&self) -> Result<Vec<u8>> {
        decode_text(&self.sig)
    }
}

/// A DSSE envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Payload bytes, base64.
    #[serde(default)]
    pub payload: String,

    /// How to interpret the payload. Covered by every signature.
    #[serde(default)]
    pub payload_type: String,

    /// Signatures in the order the signers were invoked.
    #[serde(default)]
    pub signatures: Vec<Signature>,
}

impl Envelope {
    /// Decode the payload bytes.
    pub fn decode_payload(&self) -> Result<Vec<u8>> {
        decode_text(&self.payload)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DsseError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| DsseError::Serialization(e.to_string()))
    }

    /// Key ids claimed by the signatures, in order.
    pub fn key_ids(&self) -> impl Iterator<Item = &str> {
        self.signatures.iter().map(|s| s.key_id.as_str())
    }
}
