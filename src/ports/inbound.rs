//! Inbound port. The routing layer calls into the application.

use crate::domain::{
    InsightArtifact, SentimentArtifact, SessionDescriptor, SessionSummaryArtifact,
    UserActivitySnapshot,
};

/// Insight operations. None of them fail: on any generation problem a
/// deterministic fallback artifact is returned.
#[async_trait::async_trait]
pub trait InsightPort: Send + Sync {
    async fn generate_session_summary(&self, session: &SessionDescriptor)
    -> SessionSummaryArtifact;

    async fn analyze_sentiment(&self, text: &str) -> SentimentArtifact;

    async fn generate_personal_insights(&self, activity: &UserActivitySnapshot)
    -> InsightArtifact;
}
