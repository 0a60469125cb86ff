pub mod error;
pub mod request;
pub mod response;

pub use error::GenerationError;
pub use request::{
    GenerationRequest, ResponseSchema, SafetyCategory, SafetySetting, SafetyThreshold, SchemaNode,
};
pub use response::{GenerationFinishReason, GenerationResponse, TokenUsage};
