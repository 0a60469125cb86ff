use super::{IdentityProof, ProofOutcome, ProofRequest, VerificationError};
use serde::Deserialize;

/// Status flag value the widget reports on an accepted proof.
pub const WIDGET_SUCCESS_STATUS: &str = "success";

/// Identifiers the widget is initialized with, from the developer portal.
#[derive(Clone, Debug)]
pub struct AdapterConfig {
    pub app_id: String,
    pub action_id: String,
}

/// The one typed seam to the external identity widget. Implementations wrap
/// the widget's documented API; callers never probe for export shapes at
/// runtime.
#[allow(async_fn_in_trait)]
pub trait IdentityAdapter {
    /// Bring the widget up. May hang indefinitely when the host environment
    /// is absent; callers bound the wait.
    async fn init(&mut self, config: &AdapterConfig) -> Result<(), VerificationError>;

    /// Whether the widget's host application is present.
    fn check_installed(&self) -> bool;

    /// Request one personhood proof. Resolves with a tagged outcome; transport
    /// or widget faults surface as errors.
    async fn request_proof(&self, request: &ProofRequest)
        -> Result<ProofOutcome, VerificationError>;
}

/// Wire payload the widget resolves with: a status flag and, on success, the
/// proof triple.
#[derive(Clone, Debug, Deserialize)]
pub struct RawVerifyPayload {
    pub status: String,
    pub merkle_root: Option<String>,
    pub nullifier_hash: Option<String>,
    pub proof: Option<String>,
    pub credential_type: Option<String>,
    pub error_message: Option<String>,
}

impl ProofOutcome {
    /// Collapse a raw widget payload into the tagged outcome. A success
    /// status without a complete proof triple is a failure.
    pub fn from_payload(payload: RawVerifyPayload) -> Self {
        if payload.status != WIDGET_SUCCESS_STATUS {
            let reason = payload.error_message.unwrap_or_else(|| {
                format!("Verification failed with status: {}", payload.status)
            });
            return ProofOutcome::Failure { reason };
        }

        match (payload.merkle_root, payload.nullifier_hash, payload.proof) {
            (Some(merkle_root), Some(nullifier_hash), Some(proof)) => {
                ProofOutcome::Success(IdentityProof {
                    merkle_root,
                    nullifier_hash,
                    proof,
                    credential_type: payload
                        .credential_type
                        .unwrap_or_else(|| "orb".to_string()),
                })
            }
            _ => ProofOutcome::Failure {
                reason: "Widget reported success without a complete proof.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_payload() -> RawVerifyPayload {
        RawVerifyPayload {
            status: WIDGET_SUCCESS_STATUS.to_string(),
            merkle_root: Some("0xabc".to_string()),
            nullifier_hash: Some("0xdef".to_string()),
            proof: Some("0x123".to_string()),
            credential_type: Some("orb".to_string()),
            error_message: None,
        }
    }

    #[test]
    fn success_payload_yields_proof() {
        let outcome = ProofOutcome::from_payload(success_payload());
        match outcome {
            ProofOutcome::Success(proof) => {
                assert_eq!(proof.merkle_root, "0xabc");
                assert_eq!(proof.credential_type, "orb");
            }
            ProofOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
        }
    }

    #[test]
    fn non_success_status_is_a_failure_with_reason() {
        let mut payload = success_payload();
        payload.status = "error".to_string();
        payload.error_message = Some("User cancelled.".to_string());
        assert_eq!(
            ProofOutcome::from_payload(payload),
            ProofOutcome::Failure {
                reason: "User cancelled.".to_string()
            }
        );

        let mut payload = success_payload();
        payload.status = "cancelled".to_string();
        payload.error_message = None;
        match ProofOutcome::from_payload(payload) {
            ProofOutcome::Failure { reason } => assert!(reason.contains("cancelled")),
            ProofOutcome::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn incomplete_proof_is_a_failure() {
        let mut payload = success_payload();
        payload.nullifier_hash = None;
        assert!(matches!(
            ProofOutcome::from_payload(payload),
            ProofOutcome::Failure { .. }
        ));
    }
}
