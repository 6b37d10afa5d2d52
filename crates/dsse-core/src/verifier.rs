//! Envelope verification.
//!
//! Key ids in an envelope are unauthenticated, so they are never used to pick
//! a provider. Every signature is offered to every registered provider in
//! registration order until one accepts it. A signature nobody accepts fails
//! the whole envelope, but the remaining signatures are still checked.
//!
//! Failure priority for a single signature: a genuine rejection
//! ([`VerifyOutcome::SignatureInvalid`]) wins over "not my key"
//! ([`VerifyOutcome::KeyMismatch`]); among several rejections the last one
//! wins. Across signatures, the last unverified signature decides the error.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::envelope::Envelope;
use crate::error::{DsseError, Result};
use crate::pae;
use crate::provider::{ProviderError, SignerAsVerifier, Verifier, VerifyOutcome};
use crate::signer::EnvelopeSigner;

/// Result of checking one signature.
#[derive(Debug)]
pub enum SignatureOutcome {
    /// Accepted by the provider at `provider` (registration index).
    Verified { key_id: String, provider: usize },
    /// No provider accepted it.
    Failed { key_id: String, error: DsseError },
}

impl SignatureOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, SignatureOutcome::Verified { .. })
    }

    /// The key id claimed by the signature.
    pub fn key_id(&self) -> &str {
        match self {
            SignatureOutcome::Verified { key_id, .. } | SignatureOutcome::Failed { key_id, .. } => {
                key_id
            }
        }
    }
}

/// Per-signature outcomes for one envelope, in signature order.
#[derive(Debug)]
pub struct VerificationReport {
    pub outcomes: Vec<SignatureOutcome>,
}

impl VerificationReport {
    /// True only if every signature was accepted by some provider.
    pub fn all_verified(&self) -> bool {
        self.outcomes.iter().all(SignatureOutcome::is_verified)
    }

    /// Key ids of the accepted signatures.
    pub fn accepted_key_ids(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.is_verified())
            .map(SignatureOutcome::key_id)
            .collect()
    }

    /// Collapse into a single result: the error of the last unverified
    /// signature, or `Ok` when all were verified.
    pub fn into_result(self) -> Result<()> {
        let mut last = None;
        for outcome in self.outcomes {
            if let SignatureOutcome::Failed { error, .. } = outcome {
                last = Some(error);
            }
        }
        match last {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Verifies envelopes against a fixed, ordered set of verifiers.
#[derive(Clone)]
pub struct EnvelopeVerifier {
    providers: Vec<Arc<dyn Verifier>>,
}

impl EnvelopeVerifier {
    /// Create a verifier. Fails with [`DsseError::NoSigners`] on an empty list.
    pub fn new(providers: impl IntoIterator<Item = Arc<dyn Verifier>>) -> Result<Self> {
        let providers: Vec<_> = providers.into_iter().collect();
        if providers.is_empty() {
            return Err(DsseError::NoSigners);
        }
        Ok(Self { providers })
    }

    /// Verify every signature in `envelope`.
    pub fn verify(&self, envelope: &Envelope) -> Result<()> {
        self.verify_report(envelope)?.into_result()
    }

    /// Verify every signature and report the outcome of each.
    ///
    /// Malformed base64 and an empty signature list are still returned as
    /// errors; only per-signature verification failures go into the report.
    pub fn verify_report(&self, envelope: &Envelope) -> Result<VerificationReport> {
        verify_envelope(&self.providers, envelope)
    }
}

impl From<&EnvelopeSigner> for EnvelopeVerifier {
    /// A verifier over the same providers, in the same order.
    fn from(signer: &EnvelopeSigner) -> Self {
        let providers = signer
            .providers()
            .iter()
            .cloned()
            .map(SignerAsVerifier::shared)
            .collect();
        Self { providers }
    }
}

impl std::fmt::Debug for EnvelopeVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvelopeVerifier")
            .field("providers", &self.providers.len())
            .finish()
    }
}

/// The verification loop shared by [`EnvelopeVerifier`] and [`EnvelopeSigner`].
pub(crate) fn verify_envelope<P>(providers: &[Arc<P>], envelope: &Envelope) -> Result<VerificationReport>
where
    P: Verifier + ?Sized,
{
    if envelope.signatures.is_empty() {
        return Err(DsseError::NoSignature);
    }

    let payload = envelope.decode_payload()?;
    let message = pae::encode(&envelope.payload_type, &payload);

    debug!(
        payload_type = %envelope.payload_type,
        signatures = envelope.signatures.len(),
        providers = providers.len(),
        "verifying envelope"
    );

    let mut outcomes = Vec::with_capacity(envelope.signatures.len());

    for signature in &envelope.signatures {
        let sig = signature.decode_sig()?;

        let mut verified_by = None;
        let mut rejection: Option<ProviderError> = None;

        for (index, provider) in providers.iter().enumerate() {
            match provider.verify(&signature.key_id, &message, &sig) {
                VerifyOutcome::Verified => {
                    verified_by = Some(index);
                    break;
                }
                VerifyOutcome::KeyMismatch => {
                    trace!(key_id = %signature.key_id, provider = index, "key id not recognized");
                }
                VerifyOutcome::SignatureInvalid(err) => {
                    debug!(key_id = %signature.key_id, provider = index, error = %err, "signature rejected");
                    rejection = Some(err);
                }
            }
        }

        let outcome = match verified_by {
            Some(provider) => {
                debug!(key_id = %signature.key_id, provider, "signature verified");
                SignatureOutcome::Verified {
                    key_id: signature.key_id.clone(),
                    provider,
                }
            }
            None => {
                let error = match rejection {
                    Some(err) => DsseError::VerificationFailed(err),
                    None => DsseError::UnknownKey,
                };
                warn!(key_id = %signature.key_id, error = %error, "no provider accepted signature");
                SignatureOutcome::Failed {
                    key_id: signature.key_id.clone(),
                    error,
                }
            }
        };
        outcomes.push(outcome);
    }

    Ok(VerificationReport { outcomes })
}
