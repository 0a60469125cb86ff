use super::{GeminiBackend, GeminiConfig, GEMINI_DEFAULT_MODEL_ID};
use crate::llms::{
    api::config::{ApiConfig, LlmApiConfigTrait},
    LlmBackend,
};
use crate::logging::{LoggingConfig, LoggingConfigTrait};

pub struct GeminiBackendBuilder {
    pub config: GeminiConfig,
    pub model_id: String,
}

impl Default for GeminiBackendBuilder {
    fn default() -> Self {
        Self {
            config: Default::default(),
            model_id: GEMINI_DEFAULT_MODEL_ID.to_string(),
        }
    }
}

impl GeminiBackendBuilder {
    pub fn with_model_id<S: Into<String>>(mut self, model_id: S) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn init(self) -> crate::Result<std::sync::Arc<LlmBackend>> {
        Ok(std::sync::Arc::new(LlmBackend::Gemini(GeminiBackend::new(
            self.config,
            self.model_id,
        )?)))
    }
}

impl LlmApiConfigTrait for GeminiBackendBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl LoggingConfigTrait for GeminiBackendBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}
