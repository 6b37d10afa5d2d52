//! Mock providers for exercising the signing and verification policy.
//!
//! Every provider counts its calls so tests can assert which providers the
//! verification loop actually consulted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dsse_core::{EnvelopeSigner, EnvelopeVerifier, ProviderError, SignerVerifier, Verifier, VerifyOutcome};

/// Call counters shared by every fixture provider.
#[derive(Debug, Default)]
pub struct CallCounts {
    sign: AtomicUsize,
    verify: AtomicUsize,
}

impl CallCounts {
    pub fn sign_calls(&self) -> usize {
        self.sign.load(Ordering::SeqCst)
    }

    pub fn verify_calls(&self) -> usize {
        self.verify.load(Ordering::SeqCst)
    }

    fn record_sign(&self) {
        self.sign.fetch_add(1, Ordering::SeqCst);
    }

    fn record_verify(&self) {
        self.verify.fetch_add(1, Ordering::SeqCst);
    }
}

/// How a [`MockProvider`] behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Signature = message. Verifies exact echoes under its own key id.
    Echo,
    /// Signature = message plus a trailing zero byte, which its own verify
    /// then rejects. Models a provider whose sign and verify disagree.
    Corrupting,
    /// Signs normally, but verify accepts every signature under its key id.
    AcceptAll,
    /// Signs normally, but verify rejects everything, whatever the key id.
    RejectAll,
    /// Signs normally, but verify rejects every signature under its key id.
    RejectOwn,
    /// Sign always fails.
    FailSign,
}

/// A configurable in-memory provider.
#[derive(Debug)]
pub struct MockProvider {
    key_id: String,
    behavior: Behavior,
    report_key_id: bool,
    pub calls: CallCounts,
}

impl MockProvider {
    pub fn new(key_id: impl Into<String>, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            key_id: key_id.into(),
            behavior,
            report_key_id: true,
            calls: CallCounts::default(),
        })
    }

    /// Like [`MockProvider::new`], but `key_id()` reports "unsupported".
    pub fn anonymous(key_id: impl Into<String>, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            key_id: key_id.into(),
            behavior,
            report_key_id: false,
            calls: CallCounts::default(),
        })
    }

    pub fn echo(key_id: impl Into<String>) -> Arc<Self> {
        Self::new(key_id, Behavior::Echo)
    }

    pub fn verify_calls(&self) -> usize {
        self.calls.verify_calls()
    }

    pub fn sign_calls(&self) -> usize {
        self.calls.sign_calls()
    }

    fn compare(message: &[u8], signature: &[u8]) -> VerifyOutcome {
        if message.len() != signature.len() {
            VerifyOutcome::invalid("invalid length")
        } else if message != signature {
            VerifyOutcome::invalid("test err verify")
        } else {
            VerifyOutcome::Verified
        }
    }
}

impl Verifier for MockProvider {
    fn verify(&self, key_id: &str, message: &[u8], signature: &[u8]) -> VerifyOutcome {
        self.calls.record_verify();
        if self.behavior == Behavior::RejectAll {
            return VerifyOutcome::invalid("test err verify");
        }
        if key_id != self.key_id {
            return VerifyOutcome::KeyMismatch;
        }
        match self.behavior {
            Behavior::AcceptAll => VerifyOutcome::Verified,
            Behavior::RejectOwn | Behavior::FailSign => VerifyOutcome::invalid("test err verify"),
            _ => Self::compare(message, signature),
        }
    }

    fn key_id(&self) -> Result<String, ProviderError> {
        if self.report_key_id {
            Ok(self.key_id.clone())
        } else {
            Err("KeyID not supported".into())
        }
    }
}

impl SignerVerifier for MockProvider {
    fn sign(&self, message: &[u8]) -> Result<(Vec<u8>, String), ProviderError> {
        self.calls.record_sign();
        match self.behavior {
            Behavior::FailSign => Err("signing error".into()),
            Behavior::Corrupting => {
                let mut sig = message.to_vec();
                sig.push(0);
                Ok((sig, self.key_id.clone()))
            }
            _ => Ok((message.to_vec(), self.key_id.clone())),
        }
    }
}

/// Build a signer over the given mock providers.
pub fn signer_of(providers: &[Arc<MockProvider>]) -> EnvelopeSigner {
    EnvelopeSigner::new(
        providers
            .iter()
            .map(|p| p.clone() as Arc<dyn SignerVerifier>),
    )
    .expect("at least one provider")
}

/// Build a standalone verifier over the given mock providers.
pub fn verifier_of(providers: &[Arc<MockProvider>]) -> EnvelopeVerifier {
    EnvelopeVerifier::new(providers.iter().map(|p| p.clone() as Arc<dyn Verifier>))
        .expect("at least one provider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_roundtrip() {
        let p = MockProvider::echo("nil");
        let (sig, key_id) = p.sign(b"data").unwrap();
        assert_eq!(key_id, "nil");
        assert!(p.verify("nil", b"data", &sig).is_verified());
        assert_eq!(p.sign_calls(), 1);
        assert_eq!(p.verify_calls(), 1);
    }

    #[test]
    fn test_corrupting_never_verifies() {
        let p = MockProvider::new("bad", Behavior::Corrupting);
        let (sig, _) = p.sign(b"data").unwrap();
        assert!(!p.verify("bad", b"data", &sig).is_verified());
    }

    #[test]
    fn test_reject_all_ignores_key_id() {
        let p = MockProvider::new("err", Behavior::RejectAll);
        let (sig, _) = p.sign(b"data").unwrap();
        assert!(matches!(
            p.verify("err", b"data", &sig),
            VerifyOutcome::SignatureInvalid(_)
        ));
        assert!(matches!(
            p.verify("someone-else", b"data", &sig),
            VerifyOutcome::SignatureInvalid(_)
        ));
        assert_eq!(p.verify_calls(), 2);
    }

    #[test]
    fn test_anonymous_key_id() {
        let p = MockProvider::anonymous("x", Behavior::Echo);
        assert!(p.key_id().is_err());
    }
}
