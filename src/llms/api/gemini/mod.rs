pub mod builder;
pub mod generate;

use super::{
    client::ApiClient,
    config::{ApiConfig, ApiConfigTrait},
};
use crate::logging::LoggingConfig;
use crate::requests::{GenerationError, GenerationRequest, GenerationResponse};
use generate::GenerateContentRequest;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, Secret};

/// Default API base url
pub const GEMINI_API_HOST: &str = "generativelanguage.googleapis.com/v1beta";
/// API key header
pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";
/// Model used when none is requested
pub const GEMINI_DEFAULT_MODEL_ID: &str = "gemini-2.0-flash";

pub struct GeminiBackend {
    pub(crate) client: ApiClient<GeminiConfig>,
    pub model_id: String,
}

impl GeminiBackend {
    pub fn new(mut config: GeminiConfig, model_id: String) -> crate::Result<Self> {
        config.logging_config.load_logger()?;
        config.api_config.api_key = Some(config.api_config.load_api_key()?);
        Ok(Self {
            client: ApiClient::new(config),
            model_id,
        })
    }

    pub(crate) async fn generation_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let path = format!("/models/{}:generateContent", self.model_id);
        match self
            .client
            .post(&path, GenerateContentRequest::new(request)?)
            .await
        {
            Err(e) => Err(GenerationError::ClientError(e)),
            Ok(res) => GenerationResponse::new_from_gemini(res),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                host: GEMINI_API_HOST.to_string(),
                port: None,
                api_key: None,
                api_key_env_var: "GEMINI_API_KEY".to_string(),
            },
            logging_config: LoggingConfig {
                logger_name: "gemini".to_string(),
                ..Default::default()
            },
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ApiConfigTrait for GeminiConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(api_key) = self.api_key() {
            headers.insert(
                reqwest::header::HeaderName::from_static(GEMINI_API_KEY_HEADER),
                reqwest::header::HeaderValue::from_str(api_key.expose_secret()).unwrap(),
            );
        }

        headers
    }

    fn url(&self, path: &str) -> String {
        match &self.api_config.port {
            Some(port) => format!("https://{}:{}{}", self.api_config.host, port, path),
            None => format!("https://{}{}", self.api_config.host, path),
        }
    }

    fn api_key(&self) -> &Option<Secret<String>> {
        &self.api_config.api_key
    }
}
