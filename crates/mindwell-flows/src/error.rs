use thiserror::Error;

use mindwell_core::notice::Notice;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("invalid flow input: {0}")]
    InvalidInput(String),

    #[error("prompt template error: {0}")]
    Template(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for FlowError {
    fn from(e: tera::Error) -> Self {
        FlowError::Template(e.to_string())
    }
}

impl FlowError {
    /// What the student sees. Every kind of failure reads the same.
    pub fn notice(&self) -> Notice {
        Notice::flow_failure()
    }
}
