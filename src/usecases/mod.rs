//! Application use cases. Prompt building, validation, fallback and the
//! generic orchestration that ties them together.

pub mod fallback;
pub mod generator;
pub mod insight_service;
pub mod prompts;
pub mod schema;

pub use generator::{CallSite, StructuredGenerator};
pub use insight_service::{InsightService, InsightSettings, SamplingSettings};
