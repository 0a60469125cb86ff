use super::*;
use serial_test::serial;

/// Empty input must short-circuit before the backend is touched, so this
/// works with a throwaway key and no network.
#[tokio::test]
#[serial]
async fn empty_input_yields_uncertain_without_a_live_key() {
    std::env::set_var("GEMINI_API_KEY", "test-key-never-sent");
    let verifier: TextVerifier = TextVerifier::gemini()
        .logging_enabled(false)
        .init()
        .unwrap()
        .into();
    std::env::remove_var("GEMINI_API_KEY");

    let analysis = verifier.analyze_text().run("   \n ").await;
    assert_eq!(analysis.classification, TextClassification::Uncertain);
    assert_eq!(
        analysis.explanation,
        text_verifier::analysis::EMPTY_INPUT_EXPLANATION
    );
}

/// An unroutable host makes the client fail fast; the workflow must absorb
/// it into the fixed server-error result.
#[tokio::test]
#[serial]
async fn unreachable_backend_yields_the_fixed_server_error() {
    let verifier: TextVerifier = TextVerifier::gemini()
        .with_api_host("127.0.0.1")
        .with_api_port("9")
        .with_api_key("test-key")
        .logging_enabled(false)
        .init()
        .unwrap()
        .into();

    let analysis = verifier.analyze_text().run("The cat sat on the mat.").await;
    assert_eq!(analysis.classification, TextClassification::Uncertain);
    assert_eq!(
        analysis.explanation,
        text_verifier::analysis::SERVER_ERROR_EXPLANATION
    );
}

#[tokio::test]
#[serial]
#[ignore]
async fn live_analysis_returns_a_recognized_classification() {
    let verifier: TextVerifier = TextVerifier::gemini().init().unwrap().into();
    let analysis = verifier
        .analyze_text()
        .run("I went to the store this morning to buy some milk and eggs.")
        .await;
    println!("{analysis}");
    assert!(!analysis.explanation.is_empty());
}
