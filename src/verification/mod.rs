// Public modules
pub mod adapter;
pub mod provider;
pub mod simulated;

// Public exports
pub use adapter::{AdapterConfig, IdentityAdapter, RawVerifyPayload, WIDGET_SUCCESS_STATUS};
pub use provider::IdentityProvider;
pub use simulated::SimulatedWorldId;

use rand::RngCore;

/// Transient UI verification state. Lost on reload; exactly one transition
/// per completed proof attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerificationStatus {
    #[default]
    Unverified,
    Verifying,
    Verified,
    Failed,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Unverified => write!(f, "UNVERIFIED"),
            VerificationStatus::Verifying => write!(f, "VERIFYING"),
            VerificationStatus::Verified => write!(f, "VERIFIED"),
            VerificationStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Zero-knowledge proof triple asserting unique personhood. Client-reported
/// only; trustworthy use requires forwarding to a server-side verifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityProof {
    pub merkle_root: String,
    pub nullifier_hash: String,
    pub proof: String,
    pub credential_type: String,
}

/// Tagged result of one proof request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofOutcome {
    Success(IdentityProof),
    Failure { reason: String },
}

/// One proof attempt: the configured action plus a fresh signal nonce bound
/// into the proof to deter replay.
#[derive(Clone, Debug)]
pub struct ProofRequest {
    pub action: String,
    pub signal: String,
}

impl ProofRequest {
    pub fn new<S: Into<String>>(action: S) -> Self {
        Self {
            action: action.into(),
            signal: hex_nonce(16),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("identity widget unavailable: {0}")]
    WidgetUnavailable(String),
    #[error("identity widget error: {0}")]
    Widget(String),
}

pub(crate) fn hex_nonce(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    buf.iter().map(|b| format!("{b:02x}")).collect()
}
