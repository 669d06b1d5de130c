//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The generation variants
//! never reach callers of the insight operations; they are folded into a
//! fallback artifact at the orchestration boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Missing or unusable configuration. Raised at construction, never per call.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport failure, non-2xx status, or empty body from the completion endpoint.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Response text could not be parsed as a JSON object.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Parsed, but a required field is missing or invalid.
    #[error("Schema violation on field `{field}`: {reason}")]
    SchemaViolation { field: String, reason: String },
}
