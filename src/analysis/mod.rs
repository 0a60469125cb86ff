use crate::llms::LlmBackend;
use crate::requests::{
    GenerationError, GenerationRequest, ResponseSchema, SafetyCategory, SafetySetting,
    SafetyThreshold,
};
use indoc::formatdoc;
use serde::Deserialize;

/// Explanation returned for empty or whitespace-only input.
pub const EMPTY_INPUT_EXPLANATION: &str = "Input text cannot be empty.";
/// Explanation returned when the backend call fails for any reason.
pub const SERVER_ERROR_EXPLANATION: &str =
    "Failed to analyze text due to a server error. Please try again later.";

const SYSTEM_INSTRUCTION: &str =
    "You are an expert in distinguishing between AI-generated and human-written text.";

/// The tri-state verdict on text authorship.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextClassification {
    AiGenerated,
    HumanWritten,
    Uncertain,
}

impl TextClassification {
    /// The literal tags the model is constrained to.
    pub const WIRE_TAGS: [&'static str; 3] = ["AI_GENERATED", "HUMAN_WRITTEN", "UNCERTAIN"];

    /// Map a model-reported tag to the enum. Anything unrecognized collapses
    /// to Uncertain.
    pub fn from_wire_tag(tag: &str) -> Self {
        match tag {
            "AI_GENERATED" => TextClassification::AiGenerated,
            "HUMAN_WRITTEN" => TextClassification::HumanWritten,
            _ => TextClassification::Uncertain,
        }
    }
}

impl std::fmt::Display for TextClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextClassification::AiGenerated => write!(f, "AI-Generated"),
            TextClassification::HumanWritten => write!(f, "Human-Written"),
            TextClassification::Uncertain => write!(f, "Uncertain"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextAnalysis {
    pub classification: TextClassification,
    pub explanation: String,
}

impl TextAnalysis {
    fn empty_input() -> Self {
        Self {
            classification: TextClassification::Uncertain,
            explanation: EMPTY_INPUT_EXPLANATION.to_string(),
        }
    }

    fn server_error() -> Self {
        Self {
            classification: TextClassification::Uncertain,
            explanation: SERVER_ERROR_EXPLANATION.to_string(),
        }
    }
}

impl std::fmt::Display for TextAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.classification, self.explanation)
    }
}

/// The model's schema-constrained output document.
#[derive(Deserialize, Debug)]
struct AnalysisOutput {
    classification: Option<String>,
    explanation: Option<String>,
}

/// Classifies text authorship through the backend with an enforced output
/// schema. Every failure mode is absorbed into an Uncertain result; callers
/// always get some answer.
pub struct TextAnalyzer {
    pub base_req: GenerationRequest,
    backend: std::sync::Arc<LlmBackend>,
}

impl TextAnalyzer {
    pub fn new(backend: std::sync::Arc<LlmBackend>) -> Self {
        Self {
            base_req: GenerationRequest {
                system: Some(SYSTEM_INSTRUCTION.to_string()),
                response_schema: Some(analysis_schema()),
                safety_settings: moderate_safety_settings(),
                temperature: 0.2,
                max_output_tokens: 256,
                ..Default::default()
            },
            backend,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.base_req.temperature = temperature;
        self
    }

    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.base_req.max_output_tokens = max_output_tokens;
        self
    }

    /// Analyze one input. Trimmed-empty input short-circuits without
    /// contacting the backend; backend failures are logged and mapped to the
    /// fixed server-error result.
    pub async fn run<T: AsRef<str>>(&self, text: T) -> TextAnalysis {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return TextAnalysis::empty_input();
        }

        match self.request(text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                crate::error!("Text analysis failed: {e}");
                TextAnalysis::server_error()
            }
        }
    }

    async fn request(&self, text: &str) -> Result<TextAnalysis, GenerationError> {
        let mut req = self.base_req.clone();
        req.input = formatdoc! {"
            Analyze the following text and classify it as AI_GENERATED, HUMAN_WRITTEN, or UNCERTAIN.
            Provide a brief explanation for your classification (1-2 sentences).

            Text to analyze: {text}"
        };

        let res = self.backend.generation_request(&req).await?;
        parse_analysis(&res.content)
    }
}

/// Output schema: exactly two fields, the classification constrained to the
/// three literal tags.
fn analysis_schema() -> ResponseSchema {
    ResponseSchema::object(
        vec![
            (
                "classification".to_string(),
                ResponseSchema::enum_field(
                    "The classification of the text.",
                    &TextClassification::WIRE_TAGS,
                ),
            ),
            (
                "explanation".to_string(),
                ResponseSchema::string_field("The explanation of the classification."),
            ),
        ],
        vec!["classification".to_string(), "explanation".to_string()],
    )
}

/// Block only high-severity hate speech and dangerous content. Legitimate
/// samples may discuss sensitive topics, so lower severities pass through.
fn moderate_safety_settings() -> Vec<SafetySetting> {
    vec![
        SafetySetting {
            category: SafetyCategory::DangerousContent,
            threshold: SafetyThreshold::BlockOnlyHigh,
        },
        SafetySetting {
            category: SafetyCategory::HateSpeech,
            threshold: SafetyThreshold::BlockOnlyHigh,
        },
    ]
}

fn parse_analysis(content: &str) -> Result<TextAnalysis, GenerationError> {
    let output: AnalysisOutput = serde_json::from_str(content)
        .map_err(|e| GenerationError::ResponseParseError(e.to_string()))?;

    let classification = output
        .classification
        .as_deref()
        .map(TextClassification::from_wire_tag)
        .unwrap_or(TextClassification::Uncertain);

    Ok(TextAnalysis {
        classification,
        explanation: output.explanation.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llms::mock::{self, MockBackend};

    #[tokio::test]
    async fn empty_input_never_reaches_the_backend() {
        let backend = MockBackend::returning_content("unused");
        let analyzer = TextAnalyzer::new(backend.clone());

        for input in ["", "   ", "\n\t  \n"] {
            let analysis = analyzer.run(input).await;
            assert_eq!(analysis.classification, TextClassification::Uncertain);
            assert_eq!(analysis.explanation, EMPTY_INPUT_EXPLANATION);
        }
        assert_eq!(mock::call_count(&backend), 0);
    }

    #[tokio::test]
    async fn well_formed_tags_map_to_their_variants() {
        for (tag, expected) in [
            ("AI_GENERATED", TextClassification::AiGenerated),
            ("HUMAN_WRITTEN", TextClassification::HumanWritten),
            ("UNCERTAIN", TextClassification::Uncertain),
        ] {
            let backend = MockBackend::returning_content(format!(
                r#"{{"classification": "{tag}", "explanation": "Because."}}"#
            ));
            let analysis = TextAnalyzer::new(backend).run("The cat sat on the mat.").await;
            assert_eq!(analysis.classification, expected);
            assert_eq!(analysis.explanation, "Because.");
        }
    }

    #[tokio::test]
    async fn unknown_or_missing_tag_collapses_to_uncertain() {
        let backend =
            MockBackend::returning_content(r#"{"classification": "ALIEN", "explanation": "?"}"#);
        let analysis = TextAnalyzer::new(backend).run("some text").await;
        assert_eq!(analysis.classification, TextClassification::Uncertain);

        let backend = MockBackend::returning_content(r#"{"explanation": "no tag"}"#);
        let analysis = TextAnalyzer::new(backend).run("some text").await;
        assert_eq!(analysis.classification, TextClassification::Uncertain);
        assert_eq!(analysis.explanation, "no tag");
    }

    #[tokio::test]
    async fn backend_failure_maps_to_the_fixed_server_error() {
        let backend = MockBackend::failing();
        let analysis = TextAnalyzer::new(backend).run("some text").await;
        assert_eq!(
            analysis,
            TextAnalysis {
                classification: TextClassification::Uncertain,
                explanation: SERVER_ERROR_EXPLANATION.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn malformed_payload_maps_to_the_fixed_server_error() {
        let backend = MockBackend::returning_content("not json at all");
        let analysis = TextAnalyzer::new(backend).run("some text").await;
        assert_eq!(analysis.classification, TextClassification::Uncertain);
        assert_eq!(analysis.explanation, SERVER_ERROR_EXPLANATION);
    }

    #[tokio::test]
    async fn display_strings_match_the_ui_labels() {
        let backend = MockBackend::returning_content(
            r#"{"classification": "HUMAN_WRITTEN", "explanation": "Personal anecdotes."}"#,
        );
        let analysis = TextAnalyzer::new(backend).run("The cat sat on the mat.").await;
        assert_eq!(analysis.classification.to_string(), "Human-Written");
        assert_eq!(
            TextClassification::AiGenerated.to_string(),
            "AI-Generated"
        );
        assert_eq!(TextClassification::Uncertain.to_string(), "Uncertain");
    }
}
