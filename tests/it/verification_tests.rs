use super::*;

fn quick_config() -> AppConfig {
    AppConfig::new().with_widget_init_wait(std::time::Duration::from_millis(50))
}

#[tokio::test]
async fn full_verification_flow() {
    let mut provider = IdentityProvider::init(SimulatedWorldId::default(), &quick_config()).await;
    assert_eq!(provider.status(), VerificationStatus::Unverified);
    assert!(provider.is_available());

    let status = provider.verify().await;
    assert_eq!(status, VerificationStatus::Verified);

    let proof = provider.proof().expect("verified without a proof");
    assert!(!proof.merkle_root.is_empty());
    assert!(!proof.nullifier_hash.is_empty());
    assert!(!proof.proof.is_empty());
}

#[tokio::test]
async fn rejection_carries_a_message() {
    let mut provider = IdentityProvider::init(SimulatedWorldId::rejecting(), &quick_config()).await;

    let status = provider.verify().await;
    assert_eq!(status, VerificationStatus::Failed);
    assert!(!provider.error().unwrap().is_empty());
    assert!(provider.proof().is_none());
}

#[tokio::test]
async fn init_timeout_marks_the_widget_unavailable() {
    let adapter = SimulatedWorldId::default().with_init_delay(std::time::Duration::from_secs(10));
    let provider = IdentityProvider::init(adapter, &quick_config()).await;
    assert!(!provider.is_available());
}

/// Repeated attempts bind fresh signals, so two verified sessions never share
/// a nullifier.
#[tokio::test]
async fn repeat_verification_uses_a_fresh_signal() {
    let config = quick_config();
    let mut first = IdentityProvider::init(SimulatedWorldId::default(), &config).await;
    let mut second = IdentityProvider::init(SimulatedWorldId::default(), &config).await;
    first.verify().await;
    second.verify().await;

    let a = first.proof().unwrap().nullifier_hash.clone();
    let b = second.proof().unwrap().nullifier_hash.clone();
    assert_ne!(a, b);
}
