//! Fallback factories. Total, deterministic, no I/O.

use crate::domain::{
    EmotionalTrend, EngagementLevel, InsightArtifact, SentimentArtifact, SentimentLabel,
    SessionDescriptor, SessionSummaryArtifact, UserActivitySnapshot,
};

pub fn session_summary_fallback(session: &SessionDescriptor) -> SessionSummaryArtifact {
    let people = if session.participant_count == 1 {
        "1 participant".to_string()
    } else {
        format!("{} participants", session.participant_count)
    };
    let topic = if session.session_type.trim().is_empty() {
        "Forgiveness practice".to_string()
    } else {
        format!("{} support", session.session_type.trim())
    };

    SessionSummaryArtifact {
        summary: format!(
            "{} brought together {} for a shared step on the forgiveness journey. \
             Participants explored their experiences in a supportive group setting.",
            session.title, people
        ),
        key_topics: vec![
            topic,
            "Emotional healing".to_string(),
            "Community support".to_string(),
        ],
        action_items: vec![
            "Reflect on the session in your journal".to_string(),
            "Practice one self-compassion exercise this week".to_string(),
        ],
        next_steps_recommendations: "Continue with the next step of the journey and share \
                                     your progress at the next session."
            .to_string(),
        engagement_level: EngagementLevel::Medium,
    }
}

pub fn sentiment_fallback(_text: &str) -> SentimentArtifact {
    SentimentArtifact {
        score: 0.0,
        label: SentimentLabel::Neutral,
        emotions: vec!["neutral".to_string()],
    }
}

pub fn personal_insights_fallback(_activity: &UserActivitySnapshot) -> InsightArtifact {
    InsightArtifact {
        strengths: vec![
            "Commitment to personal growth".to_string(),
            "Willingness to reflect on difficult emotions".to_string(),
            "Courage to continue the forgiveness journey".to_string(),
        ],
        recommendations: vec![
            "Keep a regular journaling practice".to_string(),
            "Join an upcoming group session for support".to_string(),
            "Be patient with yourself as you move through each step".to_string(),
        ],
        emotional_trend: EmotionalTrend::Stable,
    }
}
