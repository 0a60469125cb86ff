pub use crate::{
    analysis::{TextAnalysis, TextAnalyzer, TextClassification},
    config::AppConfig,
    llms::LlmApiConfigTrait,
    logging::LoggingConfigTrait,
    verification::{
        IdentityAdapter, IdentityProof, IdentityProvider, ProofOutcome, ProofRequest,
        SimulatedWorldId, VerificationStatus,
    },
    voting::{TextSnippet, Vote, VotingDeck},
    TextVerifier,
};
