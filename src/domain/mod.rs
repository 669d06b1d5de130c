//! Core domain layer. No external I/O dependencies.
//!
//! Inputs, artifacts and errors live here. Dependencies flow inward.

pub mod artifacts;
pub mod entities;
pub mod errors;

pub use artifacts::{
    EmotionalTrend, EngagementLevel, FallbackReason, Generated, InsightArtifact, Provenance,
    SentimentArtifact, SentimentLabel, SessionSummaryArtifact,
};
pub use entities::{SessionDescriptor, TOTAL_JOURNEY_STEPS, UserActivitySnapshot};
pub use errors::DomainError;
