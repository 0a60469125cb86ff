pub mod analysis;
pub mod config;
pub mod llms;
pub mod logging;
pub mod prelude;
pub mod requests;
pub mod verification;
pub mod voting;

#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Result};
pub use prelude::*;
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub struct TextVerifier {
    pub backend: std::sync::Arc<llms::LlmBackend>,
}

impl TextVerifier {
    pub fn new(backend: std::sync::Arc<llms::LlmBackend>) -> Self {
        Self { backend }
    }

    /// Creates a new instance of the [`GeminiBackendBuilder`]. The builder allows you to specify the model and other parameters. It is converted to a `TextVerifier` instance using the `init` method.
    pub fn gemini() -> llms::api::gemini::builder::GeminiBackendBuilder {
        llms::api::gemini::builder::GeminiBackendBuilder::default()
    }

    /// The authorship classification workflow for this backend.
    pub fn analyze_text(&self) -> analysis::TextAnalyzer {
        analysis::TextAnalyzer::new(self.backend.clone())
    }
}

impl From<std::sync::Arc<llms::LlmBackend>> for TextVerifier {
    fn from(backend: std::sync::Arc<llms::LlmBackend>) -> Self {
        Self::new(backend)
    }
}
