//! Insight service. The three configured call sites behind `InsightPort`.

use crate::domain::{
    EmotionalTrend, EngagementLevel, Generated, InsightArtifact, SentimentArtifact,
    SentimentLabel, SessionDescriptor, SessionSummaryArtifact, UserActivitySnapshot,
};
use crate::ports::{CompletionPort, InsightPort};
use crate::usecases::fallback::{
    personal_insights_fallback, sentiment_fallback, session_summary_fallback,
};
use crate::usecases::generator::{CallSite, StructuredGenerator};
use crate::usecases::prompts::{
    personal_insights_prompt, sentiment_prompt, session_summary_prompt,
};
use crate::usecases::schema::{FieldKind, FieldSpec, ResponseSchema};
use std::sync::Arc;
use tracing::warn;

pub const SESSION_SUMMARY_SCHEMA: ResponseSchema = ResponseSchema {
    artifact: "session_summary",
    fields: &[
        FieldSpec::new("summary", FieldKind::Text),
        FieldSpec::new("keyTopics", FieldKind::TextList { min: 1, max: None }),
        FieldSpec::new("actionItems", FieldKind::TextList { min: 0, max: None }),
        FieldSpec::new("nextStepsRecommendations", FieldKind::Text),
        FieldSpec::new("engagementLevel", FieldKind::Label(EngagementLevel::LABELS)),
    ],
};

pub const SENTIMENT_SCHEMA: ResponseSchema = ResponseSchema {
    artifact: "sentiment",
    fields: &[
        FieldSpec::new("score", FieldKind::Number { min: -1.0, max: 1.0 }),
        FieldSpec::new("label", FieldKind::Label(SentimentLabel::LABELS)),
        FieldSpec::new("emotions", FieldKind::TextList { min: 1, max: Some(5) }),
    ],
};

/// Strength count (3-4) is asked for in the prompt but not enforced.
pub const PERSONAL_INSIGHTS_SCHEMA: ResponseSchema = ResponseSchema {
    artifact: "personal_insights",
    fields: &[
        FieldSpec::new("strengths", FieldKind::TextList { min: 0, max: None }),
        FieldSpec::new("recommendations", FieldKind::TextList { min: 0, max: None }),
        FieldSpec::new("emotionalTrend", FieldKind::Label(EmotionalTrend::LABELS)),
    ],
};

/// Token budget and sampling temperature for one call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightSettings {
    pub session_summary: SamplingSettings,
    pub sentiment: SamplingSettings,
    pub personal_insights: SamplingSettings,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            session_summary: SamplingSettings {
                max_tokens: 500,
                temperature: 0.7,
            },
            // Low temperature: the same text should score the same way.
            sentiment: SamplingSettings {
                max_tokens: 150,
                temperature: 0.3,
            },
            personal_insights: SamplingSettings {
                max_tokens: 600,
                temperature: 0.7,
            },
        }
    }
}

/// Service for session summaries, sentiment analysis and personal insights.
///
/// Stateless apart from its configuration; share it behind an `Arc` and call
/// it concurrently.
pub struct InsightService {
    generator: StructuredGenerator,
    session_summary: CallSite<SessionDescriptor, SessionSummaryArtifact>,
    sentiment: CallSite<str, SentimentArtifact>,
    personal_insights: CallSite<UserActivitySnapshot, InsightArtifact>,
}

impl InsightService {
    /// Create a new insight service.
    ///
    /// # Arguments
    /// * `completion` - Completion port implementation (OpenAI, Mock, etc.)
    /// * `settings` - Per-call-site token budgets and temperatures
    pub fn new(completion: Arc<dyn CompletionPort>, settings: InsightSettings) -> Self {
        Self {
            generator: StructuredGenerator::new(completion),
            session_summary: CallSite {
                name: "session_summary",
                prompt: session_summary_prompt,
                schema: SESSION_SUMMARY_SCHEMA,
                fallback: session_summary_fallback,
                max_tokens: settings.session_summary.max_tokens,
                temperature: settings.session_summary.temperature,
            },
            sentiment: CallSite {
                name: "sentiment",
                prompt: sentiment_prompt,
                schema: SENTIMENT_SCHEMA,
                fallback: sentiment_fallback,
                max_tokens: settings.sentiment.max_tokens,
                temperature: settings.sentiment.temperature,
            },
            personal_insights: CallSite {
                name: "personal_insights",
                prompt: personal_insights_prompt,
                schema: PERSONAL_INSIGHTS_SCHEMA,
                fallback: personal_insights_fallback,
                max_tokens: settings.personal_insights.max_tokens,
                temperature: settings.personal_insights.temperature,
            },
        }
    }

    pub async fn generate_session_summary_with_provenance(
        &self,
        session: &SessionDescriptor,
    ) -> Generated<SessionSummaryArtifact> {
        self.generator.generate(&self.session_summary, session).await
    }

    pub async fn analyze_sentiment_with_provenance(
        &self,
        text: &str,
    ) -> Generated<SentimentArtifact> {
        self.generator.generate(&self.sentiment, text).await
    }

    pub async fn generate_personal_insights_with_provenance(
        &self,
        activity: &UserActivitySnapshot,
    ) -> Generated<InsightArtifact> {
        if let Err(e) = activity.validate() {
            warn!(error = %e, "activity snapshot out of range, generating anyway");
        }
        self.generator
            .generate(&self.personal_insights, activity)
            .await
    }
}

#[async_trait::async_trait]
impl InsightPort for InsightService {
    async fn generate_session_summary(
        &self,
        session: &SessionDescriptor,
    ) -> SessionSummaryArtifact {
        self.generate_session_summary_with_provenance(session)
            .await
            .into_artifact()
    }

    async fn analyze_sentiment(&self, text: &str) -> SentimentArtifact {
        self.analyze_sentiment_with_provenance(text)
            .await
            .into_artifact()
    }

    async fn generate_personal_insights(
        &self,
        activity: &UserActivitySnapshot,
    ) -> InsightArtifact {
        self.generate_personal_insights_with_provenance(activity)
            .await
            .into_artifact()
    }
}
