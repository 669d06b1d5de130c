//! Generated artifacts. Field names match the JSON the model is asked for.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    High,
    Medium,
    Low,
}

impl EngagementLevel {
    pub const LABELS: &'static [&'static str] = &["high", "medium", "low"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const LABELS: &'static [&'static str] = &["positive", "neutral", "negative"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTrend {
    Improving,
    Stable,
    NeedsAttention,
}

impl EmotionalTrend {
    pub const LABELS: &'static [&'static str] = &["improving", "stable", "needs_attention"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryArtifact {
    pub summary: String,
    pub key_topics: Vec<String>,
    pub action_items: Vec<String>,
    pub next_steps_recommendations: String,
    pub engagement_level: EngagementLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentArtifact {
    /// In `[-1.0, 1.0]`.
    pub score: f64,
    pub label: SentimentLabel,
    pub emotions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightArtifact {
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub emotional_trend: EmotionalTrend,
}

/// Why a fallback artifact was returned instead of the model's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackReason {
    GenerationFailed,
    MalformedResponse,
    SchemaViolation { field: String },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerationFailed => write!(f, "generation_failed"),
            Self::MalformedResponse => write!(f, "malformed_response"),
            Self::SchemaViolation { field } => write!(f, "schema_violation({})", field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Provenance {
    Model,
    Fallback { reason: FallbackReason },
}

/// An artifact together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generated<A> {
    pub artifact: A,
    pub provenance: Provenance,
}

impl<A> Generated<A> {
    pub fn from_model(artifact: A) -> Self {
        Self {
            artifact,
            provenance: Provenance::Model,
        }
    }

    pub fn from_fallback(artifact: A, reason: FallbackReason) -> Self {
        Self {
            artifact,
            provenance: Provenance::Fallback { reason },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.provenance, Provenance::Fallback { .. })
    }

    pub fn into_artifact(self) -> A {
        self.artifact
    }
}
