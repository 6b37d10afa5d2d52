//! Envelope construction with one or more signing providers.

use std::sync::Arc;

use tracing::debug;

use crate::codec::encode_text;
use crate::envelope::{Envelope, Signature};
use crate::error::{DsseError, Result};
use crate::pae;
use crate::provider::SignerVerifier;
use crate::verifier::{verify_envelope, VerificationReport};

/// Signs payloads with every registered provider, in registration order.
///
/// The same provider list also verifies, so a signer can check the envelopes
/// it produces (or any other envelope signed by the same keys).
#[derive(Clone)]
pub struct EnvelopeSigner {
    providers: Vec<Arc<dyn SignerVerifier>>,
}

impl EnvelopeSigner {
    /// Create a signer. Fails with [`DsseError::NoSigners`] on an empty list.
    pub fn new(providers: impl IntoIterator<Item = Arc<dyn SignerVerifier>>) -> Result<Self> {
        let providers: Vec<_> = providers.into_iter().collect();
        if providers.is_empty() {
            return Err(DsseError::NoSigners);
        }
        Ok(Self { providers })
    }

    /// The registered providers, in order.
    pub fn providers(&self) -> &[Arc<dyn SignerVerifier>] {
        &self.providers
    }

    /// Each provider's own key id, in order.
    pub fn key_ids(&self) -> Result<Vec<String>> {
        self.providers
            .iter()
            .map(|p| p.key_id().map_err(DsseError::Provider))
            .collect()
    }

    /// Sign `payload` as `payload_type`.
    ///
    /// The first provider error aborts signing and is returned unchanged;
    /// later providers are not invoked.
    pub fn sign_payload(&self, payload_type: &str, payload: &[u8]) -> Result<Envelope> {
        let message = pae::encode(payload_type, payload);

        let mut signatures = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            let (sig, key_id) = provider.sign(&message).map_err(DsseError::Provider)?;
            debug!(key_id = %key_id, sig_len = sig.len(), "payload signed");
            signatures.push(Signature {
                key_id,
                sig: encode_text(&sig),
            });
        }

        Ok(Envelope {
            payload: encode_text(payload),
            payload_type: payload_type.to_string(),
            signatures,
        })
    }

    /// Verify `envelope` against this signer's providers.
    pub fn verify(&self, envelope: &Envelope) -> Result<()> {
        self.verify_report(envelope)?.into_result()
    }

    /// Verify `envelope` and report per-signature outcomes.
    pub fn verify_report(&self, envelope: &Envelope) -> Result<VerificationReport> {
        verify_envelope(&self.providers, envelope)
    }
}

impl std::fmt::Debug for EnvelopeSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvelopeSigner")
            .field("providers", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderError, Verifier, VerifyOutcome};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// "Signs" by echoing the message.
    struct Echo(&'static str);

    impl Verifier for Echo {
        fn verify(&self, key_id: &str, message: &[u8], signature: &[u8]) -> VerifyOutcome {
            if key_id != self.0 {
                VerifyOutcome::KeyMismatch
            } else if message == signature {
                VerifyOutcome::Verified
            } else {
                VerifyOutcome::invalid("mismatch")
            }
        }

        fn key_id(&self) -> std::result::Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    impl SignerVerifier for Echo {
        fn sign(&self, message: &[u8]) -> std::result::Result<(Vec<u8>, String), ProviderError> {
            Ok((message.to_vec(), self.0.to_string()))
        }
    }

    struct Broken {
        sign_calls: AtomicUsize,
    }

    impl Verifier for Broken {
        fn verify(&self, _: &str, _: &[u8], _: &[u8]) -> VerifyOutcome {
            VerifyOutcome::invalid("broken")
        }

        fn key_id(&self) -> std::result::Result<String, ProviderError> {
            Err("KeyID not supported".into())
        }
    }

    impl SignerVerifier for Broken {
        fn sign(&self, _: &[u8]) -> std::result::Result<(Vec<u8>, String), ProviderError> {
            self.sign_calls.fetch_add(1, Ordering::SeqCst);
            Err("signing error".into())
        }
    }

    #[test]
    fn test_no_signers() {
        assert!(matches!(
            EnvelopeSigner::new(Vec::new()),
            Err(DsseError::NoSigners)
        ));
    }

    #[test]
    fn test_sign_single() {
        let signer = EnvelopeSigner::new(vec![Arc::new(Echo("nil")) as Arc<dyn SignerVerifier>]).unwrap();
        let env = signer
            .sign_payload("http://example.com/HelloWorld", b"hello world")
            .unwrap();

        let expected = Envelope {
            payload: encode_text(b"hello world"),
            payload_type: "http://example.com/HelloWorld".to_string(),
            signatures: vec![Signature {
                key_id: "nil".to_string(),
                sig: encode_text(&pae::encode("http://example.com/HelloWorld", b"hello world")),
            }],
        };
        assert_eq!(env, expected);
        signer.verify(&env).unwrap();
    }

    #[test]
    fn test_signature_order_follows_registration() {
        let signer = EnvelopeSigner::new(vec![
            Arc::new(Echo("one")) as Arc<dyn SignerVerifier>,
            Arc::new(Echo("two")) as Arc<dyn SignerVerifier>,
        ])
        .unwrap();

        let env = signer.sign_payload("t", b"p").unwrap();
        assert_eq!(env.key_ids().collect::<Vec<_>>(), vec!["one", "two"]);
        assert_eq!(signer.key_ids().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_sign_error_aborts() {
        let broken = Arc::new(Broken {
            sign_calls: AtomicUsize::new(0),
        });
        let signer = EnvelopeSigner::new(vec![
            broken.clone() as Arc<dyn SignerVerifier>,
            broken.clone() as Arc<dyn SignerVerifier>,
        ])
        .unwrap();

        let err = signer.sign_payload("t", b"d").unwrap_err();
        assert_eq!(err.to_string(), "signing error");
        assert!(matches!(err, DsseError::Provider(_)));
        assert_eq!(broken.sign_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_verifier_built_from_signer() {
        use crate::verifier::EnvelopeVerifier;

        let signer = EnvelopeSigner::new(vec![
            Arc::new(Echo("one")) as Arc<dyn SignerVerifier>,
            Arc::new(Echo("two")) as Arc<dyn SignerVerifier>,
        ])
        .unwrap();
        let env = signer.sign_payload("t", b"p").unwrap();

        let verifier = EnvelopeVerifier::from(&signer);
        let report = verifier.verify_report(&env).unwrap();
        assert_eq!(report.accepted_key_ids(), vec!["one", "two"]);
        assert!(matches!(
            report.outcomes[1],
            crate::verifier::SignatureOutcome::Verified { provider: 1, .. }
        ));

        let mut retyped = env.clone();
        retyped.payload_type = "u".to_string();
        assert!(matches!(
            verifier.verify(&retyped),
            Err(DsseError::VerificationFailed(_))
        ));
    }

    #[test]
    fn test_key_id_error_propagates() {
        let signer = EnvelopeSigner::new(vec![Arc::new(Broken {
            sign_calls: AtomicUsize::new(0),
        }) as Arc<dyn SignerVerifier>])
        .unwrap();

        assert_eq!(signer.key_ids().unwrap_err().to_string(), "KeyID not supported");
    }
}
