//! Structured generation. One orchestration shared by every call site.
//!
//! building -> invoking -> validating -> done, or on any failure
//! -> fallback-applied -> done. Errors never leave `generate`.

use crate::domain::{DomainError, FallbackReason, Generated};
use crate::ports::{CompletionPort, CompletionRequest};
use crate::usecases::prompts::PromptPair;
use crate::usecases::schema::ResponseSchema;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything that distinguishes one call site from another.
pub struct CallSite<I: ?Sized, A> {
    /// Name used in diagnostics.
    pub name: &'static str,
    pub prompt: fn(&I) -> PromptPair,
    pub schema: ResponseSchema,
    pub fallback: fn(&I) -> A,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Runs call sites against a completion port. Holds no per-call state.
#[derive(Clone)]
pub struct StructuredGenerator {
    completion: Arc<dyn CompletionPort>,
}

impl StructuredGenerator {
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self { completion }
    }

    /// Produce an artifact for `input`. Always returns one.
    pub async fn generate<I, A>(&self, site: &CallSite<I, A>, input: &I) -> Generated<A>
    where
        I: ?Sized + Sync,
        A: DeserializeOwned + Send,
    {
        match self.attempt(site, input).await {
            Ok(artifact) => {
                info!(call_site = site.name, "artifact generated by model");
                Generated::from_model(artifact)
            }
            Err(err) => {
                let reason = fallback_reason(&err);
                match &reason {
                    FallbackReason::SchemaViolation { field } => warn!(
                        call_site = site.name,
                        field = %field,
                        error = %err,
                        "schema violation, using fallback"
                    ),
                    _ => warn!(
                        call_site = site.name,
                        reason = %reason,
                        error = %err,
                        "generation failed, using fallback"
                    ),
                }
                Generated::from_fallback((site.fallback)(input), reason)
            }
        }
    }

    /// Exactly one completion call; no retries.
    async fn attempt<I, A>(&self, site: &CallSite<I, A>, input: &I) -> Result<A, DomainError>
    where
        I: ?Sized + Sync,
        A: DeserializeOwned + Send,
    {
        let PromptPair { system, user } = (site.prompt)(input);
        let request = CompletionRequest {
            system,
            prompt: user,
            max_tokens: site.max_tokens,
            temperature: site.temperature,
        };

        let raw = self.completion.complete(&request).await?;
        debug!(call_site = site.name, raw_len = raw.len(), "validating response");
        site.schema.parse(&raw)
    }
}

fn fallback_reason(err: &DomainError) -> FallbackReason {
    match err {
        DomainError::MalformedResponse(_) => FallbackReason::MalformedResponse,
        DomainError::SchemaViolation { field, .. } => FallbackReason::SchemaViolation {
            field: field.clone(),
        },
        // Anything the port reports counts as a failed invocation.
        DomainError::GenerationFailed(_)
        | DomainError::Config(_)
        | DomainError::InvalidInput(_) => FallbackReason::GenerationFailed,
    }
}
