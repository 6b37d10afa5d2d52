//! Proptest generators for property-based testing.

use std::sync::Arc;

use proptest::prelude::*;

use dsse_core::{Envelope, EnvelopeSigner, SignerVerifier};
use dsse_ed25519::Ed25519Signer;

/// Generate a media-type-like payload type, including the empty string.
pub fn payload_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("application/vnd.in-toto+json".to_string()),
        "[a-z]{1,12}/[a-z0-9.+-]{1,24}",
        // Spaces and the version tag must not confuse the framing.
        "(DSSEv1| |[0-9]){0,8}",
    ]
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate an Ed25519 signer from a random seed.
pub fn ed25519_signer() -> impl Strategy<Value = Ed25519Signer> {
    any::<[u8; 32]>().prop_map(|seed| Ed25519Signer::from_seed(&seed))
}

/// Parameters for signing one envelope.
#[derive(Debug, Clone)]
pub struct EnvelopeParams {
    pub seeds: Vec<[u8; 32]>,
    pub payload_type: String,
    pub payload: Vec<u8>,
}

impl Arbitrary for EnvelopeParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop::collection::vec(any::<[u8; 32]>(), 1..=3),
            payload_type(),
            payload(512),
        )
            .prop_map(|(seeds, payload_type, payload)| EnvelopeParams {
                seeds,
                payload_type,
                payload,
            })
            .boxed()
    }
}

/// Build an Ed25519 signer set from parameters.
pub fn signer_from_params(params: &EnvelopeParams) -> EnvelopeSigner {
    let providers = params
        .seeds
        .iter()
        .map(|seed| Arc::new(Ed25519Signer::from_seed(seed)) as Arc<dyn SignerVerifier>);
    EnvelopeSigner::new(providers).expect("params always carry a seed")
}

/// Sign an envelope from parameters.
pub fn envelope_from_params(params: &EnvelopeParams) -> (EnvelopeSigner, Envelope) {
    let signer = signer_from_params(params);
    let envelope = signer
        .sign_payload(&params.payload_type, &params.payload)
        .expect("ed25519 signing is infallible");
    (signer, envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsse_core::DsseError;

    proptest! {
        #[test]
        fn test_sign_then_verify(params: EnvelopeParams) {
            let (signer, envelope) = envelope_from_params(&params);
            prop_assert_eq!(envelope.signatures.len(), params.seeds.len());
            prop_assert!(signer.verify(&envelope).is_ok());
        }

        #[test]
        fn test_signing_is_deterministic(params: EnvelopeParams) {
            let (_, e1) = envelope_from_params(&params);
            let (_, e2) = envelope_from_params(&params);
            prop_assert_eq!(e1, e2);
        }

        #[test]
        fn test_retyped_envelope_fails(
            params in any::<EnvelopeParams>(),
            other in payload_type(),
        ) {
            prop_assume!(other != params.payload_type);

            let (signer, mut envelope) = envelope_from_params(&params);
            envelope.payload_type = other;
            let result = signer.verify(&envelope);
            prop_assert!(matches!(result, Err(DsseError::VerificationFailed(_))));
        }
    }
}
