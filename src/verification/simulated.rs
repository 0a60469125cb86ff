use super::{
    adapter::{AdapterConfig, IdentityAdapter, RawVerifyPayload, WIDGET_SUCCESS_STATUS},
    hex_nonce, ProofOutcome, ProofRequest, VerificationError,
};

/// Client-side simulation of the identity widget. Acceptance is simulated
/// only; no proof produced here survives server-side verification.
pub struct SimulatedWorldId {
    installed: bool,
    accept: bool,
    init_delay: std::time::Duration,
    app_id: Option<String>,
}

impl Default for SimulatedWorldId {
    fn default() -> Self {
        Self {
            installed: true,
            accept: true,
            init_delay: std::time::Duration::ZERO,
            app_id: None,
        }
    }
}

impl SimulatedWorldId {
    pub fn new() -> Self {
        Default::default()
    }

    /// A widget whose user declines every proof request.
    pub fn rejecting() -> Self {
        Self {
            accept: false,
            ..Default::default()
        }
    }

    /// A widget running outside its host application.
    pub fn not_installed() -> Self {
        Self {
            installed: false,
            ..Default::default()
        }
    }

    /// Delay init completion, for exercising the bounded-wait fallback.
    pub fn with_init_delay(mut self, init_delay: std::time::Duration) -> Self {
        self.init_delay = init_delay;
        self
    }
}

impl IdentityAdapter for SimulatedWorldId {
    async fn init(&mut self, config: &AdapterConfig) -> Result<(), VerificationError> {
        if !self.init_delay.is_zero() {
            tokio::time::sleep(self.init_delay).await;
        }
        self.app_id = Some(config.app_id.clone());
        Ok(())
    }

    fn check_installed(&self) -> bool {
        self.installed
    }

    async fn request_proof(
        &self,
        request: &ProofRequest,
    ) -> Result<ProofOutcome, VerificationError> {
        if self.app_id.is_none() {
            return Err(VerificationError::WidgetUnavailable(
                "init was never called".to_string(),
            ));
        }
        if !self.installed {
            return Err(VerificationError::WidgetUnavailable(
                "host application not installed".to_string(),
            ));
        }

        let payload = if self.accept {
            RawVerifyPayload {
                status: WIDGET_SUCCESS_STATUS.to_string(),
                merkle_root: Some(format!("0x{}", hex_nonce(32))),
                // The signal is bound into the nullifier so repeated attempts
                // are distinguishable in logs.
                nullifier_hash: Some(format!("0x{}{}", request.signal, hex_nonce(16))),
                proof: Some(format!("0x{}", hex_nonce(64))),
                credential_type: Some("orb".to_string()),
                error_message: None,
            }
        } else {
            RawVerifyPayload {
                status: "error".to_string(),
                merkle_root: None,
                nullifier_hash: None,
                proof: None,
                credential_type: None,
                error_message: Some("Verification was rejected in the host app.".to_string()),
            }
        };

        Ok(ProofOutcome::from_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepting_widget_produces_a_complete_proof() {
        let mut adapter = SimulatedWorldId::default();
        adapter
            .init(&AdapterConfig {
                app_id: "app_test".to_string(),
                action_id: "action_test".to_string(),
            })
            .await
            .unwrap();

        let request = ProofRequest::new("action_test");
        match adapter.request_proof(&request).await.unwrap() {
            ProofOutcome::Success(proof) => {
                assert!(proof.merkle_root.starts_with("0x"));
                assert!(proof.nullifier_hash.contains(&request.signal));
                assert_eq!(proof.credential_type, "orb");
            }
            ProofOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
        }
    }

    #[tokio::test]
    async fn proof_request_before_init_is_an_error() {
        let adapter = SimulatedWorldId::default();
        let request = ProofRequest::new("action_test");
        assert!(matches!(
            adapter.request_proof(&request).await,
            Err(VerificationError::WidgetUnavailable(_))
        ));
    }
}
