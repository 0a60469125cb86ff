#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Request could not be built before making the API call
    #[error("RequestBuilderError: {0}")]
    RequestBuilderError(String),
    /// Transport or API-level failure reported by the HTTP client
    #[error("ClientError: {0}")]
    ClientError(#[from] crate::llms::api::ClientError),
    /// The prompt itself was rejected by the provider's safety filters
    #[error("PromptBlocked: prompt was blocked with reason: {reason}")]
    PromptBlocked { reason: String },
    /// The response finished on a safety stop and carries no usable content
    #[error("ResponseBlocked: candidate stopped with reason: {reason}")]
    ResponseBlocked { reason: String },
    /// Response had no candidates or no text content
    #[error("ResponseContentEmpty: response had no content")]
    ResponseContentEmpty,
    /// Response content did not deserialize into the requested schema
    #[error("ResponseParseError: {0}")]
    ResponseParseError(String),
}
