// Public modules
pub mod api;

// Internal imports
use crate::requests::{GenerationError, GenerationRequest, GenerationResponse};

// Public exports
pub use api::{
    gemini::{builder::GeminiBackendBuilder, GeminiBackend, GeminiConfig},
    ApiConfig, ApiError, ClientError, LlmApiConfigTrait,
};

pub enum LlmBackend {
    Gemini(GeminiBackend),
    #[cfg(test)]
    Mock(mock::MockBackend),
}

impl LlmBackend {
    pub(crate) async fn generation_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        match self {
            LlmBackend::Gemini(b) => b.generation_request(request).await,
            #[cfg(test)]
            LlmBackend::Mock(b) => b.generation_request(request),
        }
    }

    pub fn model_id(&self) -> &str {
        match self {
            LlmBackend::Gemini(b) => &b.model_id,
            #[cfg(test)]
            LlmBackend::Mock(_) => "mock",
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::requests::{GenerationFinishReason, TokenUsage};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Canned backend for unit tests. Pops one scripted result per request
    /// and counts how many requests were made.
    pub struct MockBackend {
        responses: Mutex<Vec<Result<String, GenerationError>>>,
        pub calls: AtomicUsize,
    }

    impl MockBackend {
        pub fn returning_content<S: Into<String>>(content: S) -> std::sync::Arc<LlmBackend> {
            Self::scripted(vec![Ok(content.into())])
        }

        pub fn failing() -> std::sync::Arc<LlmBackend> {
            Self::scripted(vec![Err(GenerationError::ResponseContentEmpty)])
        }

        pub fn scripted(
            responses: Vec<Result<String, GenerationError>>,
        ) -> std::sync::Arc<LlmBackend> {
            std::sync::Arc::new(LlmBackend::Mock(MockBackend {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }))
        }

        pub fn generation_request(
            &self,
            _request: &GenerationRequest,
        ) -> Result<GenerationResponse, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(GenerationError::ResponseContentEmpty);
            }
            responses.remove(0).map(|content| GenerationResponse {
                content,
                finish_reason: GenerationFinishReason::Stop,
                token_usage: TokenUsage::default(),
            })
        }
    }

    pub fn call_count(backend: &LlmBackend) -> usize {
        match backend {
            LlmBackend::Mock(b) => b.calls.load(Ordering::SeqCst),
            _ => 0,
        }
    }
}
