use super::{
    adapter::{AdapterConfig, IdentityAdapter},
    IdentityProof, ProofOutcome, ProofRequest, VerificationStatus,
};
use crate::config::AppConfig;

/// Lifecycle of the widget handle after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ProviderState {
    Ready,
    Failed(String),
}

/// Holds the identity-widget handle and the verification state machine.
/// Constructed once at application start and passed to consumers; there is no
/// module-level instance.
pub struct IdentityProvider<A: IdentityAdapter> {
    adapter: A,
    action_id: String,
    state: ProviderState,
    status: VerificationStatus,
    error: Option<String>,
    proof: Option<IdentityProof>,
}

impl<A: IdentityAdapter> IdentityProvider<A> {
    /// Initialize the widget with a bounded wait. When the wait expires or
    /// init fails, the provider comes up unavailable and the verify action
    /// stays disabled; this is not a verification failure.
    pub async fn init(mut adapter: A, config: &AppConfig) -> Self {
        let adapter_config = AdapterConfig {
            app_id: config.app_id.clone(),
            action_id: config.action_id.clone(),
        };

        let state =
            match tokio::time::timeout(config.widget_init_wait, adapter.init(&adapter_config))
                .await
            {
                Ok(Ok(())) => {
                    if adapter.check_installed() {
                        crate::info!("Identity widget ready for app {}", adapter_config.app_id);
                        ProviderState::Ready
                    } else {
                        ProviderState::Failed(
                            "Host application not installed. Open this application inside the \
                             host app to enable verification."
                                .to_string(),
                        )
                    }
                }
                Ok(Err(e)) => ProviderState::Failed(e.to_string()),
                Err(_) => ProviderState::Failed(format!(
                    "Identity widget did not initialize within {:?}.",
                    config.widget_init_wait
                )),
            };

        if let ProviderState::Failed(reason) = &state {
            crate::warn!("Identity widget unavailable: {reason}");
        }

        Self {
            adapter,
            action_id: config.action_id.clone(),
            state,
            status: VerificationStatus::Unverified,
            error: None,
            proof: None,
        }
    }

    /// Whether the verify action should be enabled.
    pub fn is_available(&self) -> bool {
        self.state == ProviderState::Ready
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    /// Human-readable message for the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The proof from the last successful verification. Client-reported; a
    /// production deployment would forward it to a server-side verifier.
    pub fn proof(&self) -> Option<&IdentityProof> {
        self.proof.as_ref()
    }

    /// Run one proof attempt with a fresh signal. Performs a single state
    /// transition on completion: success with a proof goes to Verified,
    /// everything else to Failed with a non-empty message.
    pub async fn verify(&mut self) -> VerificationStatus {
        if let ProviderState::Failed(reason) = &self.state {
            self.status = VerificationStatus::Failed;
            self.error = Some(reason.clone());
            return self.status;
        }

        self.status = VerificationStatus::Verifying;
        self.error = None;
        let request = ProofRequest::new(&self.action_id);
        crate::debug!(
            "Requesting proof for action {} with signal {}",
            request.action,
            request.signal
        );

        match self.adapter.request_proof(&request).await {
            Ok(ProofOutcome::Success(proof)) => {
                crate::info!("Verification succeeded, nullifier {}", proof.nullifier_hash);
                self.proof = Some(proof);
                self.status = VerificationStatus::Verified;
            }
            Ok(ProofOutcome::Failure { reason }) => {
                crate::warn!("Verification failed: {reason}");
                self.error = Some(if reason.is_empty() {
                    "Verification failed.".to_string()
                } else {
                    reason
                });
                self.status = VerificationStatus::Failed;
            }
            Err(e) => {
                crate::warn!("Verification errored: {e}");
                self.error = Some(e.to_string());
                self.status = VerificationStatus::Failed;
            }
        }

        self.status
    }
}
