/// A single-turn, schema-constrained generation request. Provider backends
/// translate this into their own wire format.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    /// System instruction prepended to the conversation.
    pub system: Option<String>,
    /// The user-turn content.
    pub input: String,
    /// When set, the backend must constrain output to this schema and return
    /// the content as a JSON document.
    pub response_schema: Option<ResponseSchema>,
    /// Safety categories to override from the provider default.
    pub safety_settings: Vec<SafetySetting>,
    /// 0.0 to 2.0. Lower values for analytical tasks.
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            system: None,
            input: String::new(),
            response_schema: None,
            safety_settings: Vec::new(),
            temperature: 1.0,
            max_output_tokens: 1024,
        }
    }
}

impl GenerationRequest {
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }
}

/// Output schema enforced on the model. Only the shapes this crate requests
/// are representable: flat objects of string fields, optionally enum-restricted.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseSchema {
    pub root: SchemaNode,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SchemaNode {
    Object {
        properties: Vec<(String, SchemaNode)>,
        required: Vec<String>,
    },
    String {
        description: Option<String>,
        enum_values: Option<Vec<String>>,
    },
}

impl ResponseSchema {
    pub fn object(properties: Vec<(String, SchemaNode)>, required: Vec<String>) -> Self {
        Self {
            root: SchemaNode::Object {
                properties,
                required,
            },
        }
    }

    pub fn string_field<S: Into<String>>(description: S) -> SchemaNode {
        SchemaNode::String {
            description: Some(description.into()),
            enum_values: None,
        }
    }

    pub fn enum_field<S: Into<String>, T: AsRef<str>>(description: S, values: &[T]) -> SchemaNode {
        SchemaNode::String {
            description: Some(description.into()),
            enum_values: Some(values.iter().map(|v| v.as_ref().to_owned()).collect()),
        }
    }
}

/// A harm category paired with the severity at which it should block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SafetySetting {
    pub category: SafetyCategory,
    pub threshold: SafetyThreshold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafetyCategory {
    DangerousContent,
    HateSpeech,
    Harassment,
    SexuallyExplicit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafetyThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}
