pub struct GenerationResponse {
    /// The generated completion. With a response schema set, this is the raw
    /// JSON document produced under the schema constraint.
    pub content: String,
    pub finish_reason: GenerationFinishReason,
    pub token_usage: TokenUsage,
}

impl std::fmt::Display for GenerationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "GenerationResponse:")?;
        writeln!(f, "    content: {:?}", self.content)?;
        writeln!(f, "    finish_reason: {}", self.finish_reason)?;
        write!(f, "    token_usage: {}", self.token_usage)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GenerationFinishReason {
    /// The model completed its turn.
    Stop,
    /// Generation hit the output token limit.
    MaxTokens,
    /// Any other provider-reported stop reason. Safety stops never reach
    /// here; backends surface those as errors.
    Other(String),
}

impl std::fmt::Display for GenerationFinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationFinishReason::Stop => write!(f, "Stop"),
            GenerationFinishReason::MaxTokens => write!(f, "MaxTokens"),
            GenerationFinishReason::Other(reason) => write!(f, "Other({reason})"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl std::fmt::Display for TokenUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "prompt: {} completion: {} total: {}",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )
    }
}
