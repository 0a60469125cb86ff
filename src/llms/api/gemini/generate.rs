use crate::requests::{
    GenerationError, GenerationFinishReason, GenerationRequest, GenerationResponse, SafetyCategory,
    SafetySetting, SafetyThreshold, SchemaNode, TokenUsage,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns. This crate only issues single user turns.
    pub contents: Vec<Content>,

    /// System prompt. The generative language API takes it as a top-level
    /// field rather than a "system" role message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    pub generation_config: GenerationConfig,

    /// Per-request overrides of the provider's default harm filtering.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<SafetySettingWire>,
}

impl GenerateContentRequest {
    pub fn new(req: &GenerationRequest) -> Result<Self, GenerationError> {
        if req.input.is_empty() {
            return Err(GenerationError::RequestBuilderError(
                "Request input is empty".to_string(),
            ));
        }

        let response_schema = req.response_schema.as_ref().map(|s| schema_value(&s.root));
        // JSON mode is implied by a schema; the mime type must be set with it.
        let response_mime_type = req
            .response_schema
            .as_ref()
            .map(|_| "application/json".to_string());

        Ok(GenerateContentRequest {
            contents: vec![Content::user(&req.input)],
            system_instruction: req.system.as_deref().map(Content::system),
            generation_config: GenerationConfig {
                temperature: temperature(req.temperature)?,
                max_output_tokens: req.max_output_tokens,
                response_mime_type,
                response_schema,
            },
            safety_settings: req
                .safety_settings
                .iter()
                .map(SafetySettingWire::new)
                .collect(),
        })
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

#[derive(Clone, Serialize, Debug)]
pub struct SafetySettingWire {
    pub category: String,
    pub threshold: String,
}

impl SafetySettingWire {
    fn new(setting: &SafetySetting) -> Self {
        Self {
            category: match setting.category {
                SafetyCategory::DangerousContent => "HARM_CATEGORY_DANGEROUS_CONTENT",
                SafetyCategory::HateSpeech => "HARM_CATEGORY_HATE_SPEECH",
                SafetyCategory::Harassment => "HARM_CATEGORY_HARASSMENT",
                SafetyCategory::SexuallyExplicit => "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            }
            .to_string(),
            threshold: match setting.threshold {
                SafetyThreshold::BlockNone => "BLOCK_NONE",
                SafetyThreshold::BlockOnlyHigh => "BLOCK_ONLY_HIGH",
                SafetyThreshold::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
                SafetyThreshold::BlockLowAndAbove => "BLOCK_LOW_AND_ABOVE",
            }
            .to_string(),
        }
    }
}

/// Convert the neutral schema tree into the API's OpenAPI-subset wire format.
fn schema_value(node: &SchemaNode) -> serde_json::Value {
    match node {
        SchemaNode::Object {
            properties,
            required,
        } => {
            let mut props = serde_json::Map::new();
            for (name, child) in properties {
                props.insert(name.clone(), schema_value(child));
            }
            serde_json::json!({
                "type": "OBJECT",
                "properties": props,
                "required": required,
            })
        }
        SchemaNode::String {
            description,
            enum_values,
        } => {
            let mut field = serde_json::Map::new();
            field.insert("type".to_string(), "STRING".into());
            if let Some(description) = description {
                field.insert("description".to_string(), description.as_str().into());
            }
            if let Some(enum_values) = enum_values {
                field.insert(
                    "enum".to_string(),
                    serde_json::Value::from(enum_values.clone()),
                );
            }
            serde_json::Value::Object(field)
        }
    }
}

/// Native temperature range is 0.0 to 2.0, matching the API's.
fn temperature(value: f32) -> Result<f32, GenerationError> {
    if (0.0..=2.0).contains(&value) {
        Ok(value)
    } else {
        Err(GenerationError::RequestBuilderError(
            "Temperature must be between 0.0 and 2.0".to_string(),
        ))
    }
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

impl GenerationResponse {
    pub(crate) fn new_from_gemini(
        res: GenerateContentResponse,
    ) -> Result<Self, GenerationError> {
        if let Some(feedback) = &res.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(GenerationError::PromptBlocked {
                    reason: reason.clone(),
                });
            }
        }

        let candidate = res
            .candidates
            .into_iter()
            .next()
            .ok_or(GenerationError::ResponseContentEmpty)?;

        let finish_reason = match candidate.finish_reason.as_deref() {
            None | Some("STOP") => GenerationFinishReason::Stop,
            Some("MAX_TOKENS") => GenerationFinishReason::MaxTokens,
            Some(reason @ ("SAFETY" | "PROHIBITED_CONTENT" | "BLOCKLIST")) => {
                return Err(GenerationError::ResponseBlocked {
                    reason: reason.to_string(),
                })
            }
            Some(other) => GenerationFinishReason::Other(other.to_string()),
        };

        let content = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if content.is_empty() {
            return Err(GenerationError::ResponseContentEmpty);
        }

        let usage = res.usage_metadata.unwrap_or_default();

        Ok(GenerationResponse {
            content,
            finish_reason,
            token_usage: TokenUsage {
                prompt_tokens: usage.prompt_token_count,
                completion_tokens: usage.candidates_token_count,
                total_tokens: usage.total_token_count,
            },
        })
    }
}
