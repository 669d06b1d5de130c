//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// One stateless completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction (persona and domain framing).
    pub system: String,
    /// User-turn prompt.
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Text-completion capability. Must be asked for a JSON object.
#[async_trait::async_trait]
pub trait CompletionPort: Send + Sync {
    /// Submit the request once and return the raw response text.
    ///
    /// # Errors
    /// Returns `DomainError::GenerationFailed` on transport failure, a non-2xx
    /// status, or an empty body. Implementations must not retry.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;
}
