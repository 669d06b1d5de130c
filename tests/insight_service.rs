//! Insight operations over the mock completion adapter.
//!
//! Each operation must return a valid artifact whatever the completion port
//! does, and must call the port exactly once.

use chrono::{TimeZone, Utc};
use journey_insights::adapters::ai::{MockCompletionAdapter, MockReply};
use journey_insights::domain::{
    EmotionalTrend, EngagementLevel, FallbackReason, InsightArtifact, Provenance,
    SentimentArtifact, SentimentLabel, SessionDescriptor, SessionSummaryArtifact,
    UserActivitySnapshot,
};
use journey_insights::ports::InsightPort;
use journey_insights::usecases::insight_service::{
    PERSONAL_INSIGHTS_SCHEMA, SENTIMENT_SCHEMA, SESSION_SUMMARY_SCHEMA,
};
use journey_insights::usecases::schema::ResponseSchema;
use journey_insights::usecases::{InsightService, InsightSettings};
use std::sync::Arc;

fn grief_circle() -> SessionDescriptor {
    SessionDescriptor {
        title: "Grief Circle".to_string(),
        facilitator_notes: None,
        participant_count: 6,
        session_type: "grief".to_string(),
        scheduled_time: Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap(),
        duration_minutes: None,
    }
}

fn activity() -> UserActivitySnapshot {
    UserActivitySnapshot::new(14, 4, 3, vec!["hopeful".into(), "tired".into()]).unwrap()
}

fn service(mock: &Arc<MockCompletionAdapter>) -> InsightService {
    InsightService::new(mock.clone(), InsightSettings::default())
}

/// Re-check an artifact against its own schema via its JSON form.
fn assert_satisfies<T: serde::Serialize>(schema: &ResponseSchema, artifact: &T) {
    let json = serde_json::to_string(artifact).unwrap();
    if let Err(e) = schema.validate(&json) {
        panic!("artifact does not satisfy {}: {e}", schema.artifact);
    }
}

const BAD_REPLIES: [&str; 4] = [
    "The model is unavailable right now.",
    r#"{"unexpected": true}"#,
    "[]",
    r#"{"summary": null}"#,
];

#[tokio::test]
async fn every_operation_is_total() {
    let mut scripts: Vec<MockReply> = vec![MockReply::Fail];
    scripts.extend(BAD_REPLIES.iter().map(|r| MockReply::Text(r.to_string())));

    for reply in scripts {
        let mock = Arc::new(MockCompletionAdapter::with_default(reply.clone()));
        let service = service(&mock);

        let summary = service.generate_session_summary(&grief_circle()).await;
        let sentiment = service.analyze_sentiment("I forgave my brother today.").await;
        let insights = service.generate_personal_insights(&activity()).await;

        assert_satisfies(&SESSION_SUMMARY_SCHEMA, &summary);
        assert_satisfies(&SENTIMENT_SCHEMA, &sentiment);
        assert_satisfies(&PERSONAL_INSIGHTS_SCHEMA, &insights);
        assert_eq!(mock.call_count(), 3, "reply {reply:?}");
    }
}

#[tokio::test]
async fn fallback_is_deterministic() {
    let mock = Arc::new(MockCompletionAdapter::failing());
    let service = service(&mock);

    let first_summary = service.generate_session_summary(&grief_circle()).await;
    let first_sentiment = service.analyze_sentiment("so much anger").await;
    let first_insights = service.generate_personal_insights(&activity()).await;

    for _ in 0..3 {
        assert_eq!(
            service.generate_session_summary(&grief_circle()).await,
            first_summary
        );
        assert_eq!(
            service.analyze_sentiment("so much anger").await,
            first_sentiment
        );
        assert_eq!(
            service.generate_personal_insights(&activity()).await,
            first_insights
        );
    }
}

#[tokio::test]
async fn grief_circle_failure_yields_medium_fallback() {
    let mock = Arc::new(MockCompletionAdapter::failing());

    let summary = service(&mock)
        .generate_session_summary(&grief_circle())
        .await;

    assert!(summary.summary.contains("Grief Circle"));
    assert_eq!(summary.engagement_level, EngagementLevel::Medium);
    assert!(!summary.key_topics.is_empty());
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn engagement_level_outside_enum_is_not_coerced() {
    let mock = Arc::new(MockCompletionAdapter::replying(
        r#"{
            "summary": "A moving session.",
            "keyTopics": ["loss"],
            "actionItems": ["journal nightly"],
            "nextStepsRecommendations": "Revisit the letter exercise.",
            "engagementLevel": "excellent"
        }"#,
    ));

    let generated = service(&mock)
        .generate_session_summary_with_provenance(&grief_circle())
        .await;

    assert_eq!(generated.artifact.engagement_level, EngagementLevel::Medium);
    assert!(generated.artifact.summary.contains("Grief Circle"));
    assert_eq!(
        generated.provenance,
        Provenance::Fallback {
            reason: FallbackReason::SchemaViolation {
                field: "engagementLevel".into()
            }
        }
    );
}

#[tokio::test]
async fn valid_summary_passes_through() {
    let mock = Arc::new(MockCompletionAdapter::replying(
        r#"```json
{"summary":"Six members shared memories.","keyTopics":["loss","memory"],"actionItems":[],"nextStepsRecommendations":"Bring a photo next time.","engagementLevel":"high"}
```"#,
    ));

    let generated = service(&mock)
        .generate_session_summary_with_provenance(&grief_circle())
        .await;

    assert_eq!(generated.provenance, Provenance::Model);
    assert_eq!(
        generated.artifact,
        SessionSummaryArtifact {
            summary: "Six members shared memories.".into(),
            key_topics: vec!["loss".into(), "memory".into()],
            action_items: Vec::new(),
            next_steps_recommendations: "Bring a photo next time.".into(),
            engagement_level: EngagementLevel::High,
        }
    );
}

#[tokio::test]
async fn sentiment_score_out_of_range_falls_back() {
    let mock = Arc::new(MockCompletionAdapter::replying(
        r#"{"score":1.5,"label":"positive","emotions":["joy"]}"#,
    ));

    let generated = service(&mock)
        .analyze_sentiment_with_provenance("Best day ever")
        .await;

    assert_eq!(generated.artifact.score, 0.0);
    assert_eq!(generated.artifact.label, SentimentLabel::Neutral);
    assert_eq!(
        generated.provenance,
        Provenance::Fallback {
            reason: FallbackReason::SchemaViolation {
                field: "score".into()
            }
        }
    );
}

#[tokio::test]
async fn sentiment_object_inside_array_falls_back() {
    let mock = Arc::new(MockCompletionAdapter::replying(
        r#"[{"score":0.9,"label":"positive","emotions":["joy"]}]"#,
    ));

    let generated = service(&mock)
        .analyze_sentiment_with_provenance("Finally at peace")
        .await;

    assert_eq!(generated.artifact.label, SentimentLabel::Neutral);
    assert_eq!(
        generated.provenance,
        Provenance::Fallback {
            reason: FallbackReason::MalformedResponse
        }
    );
}

#[tokio::test]
async fn sentiment_emotion_count_is_bounded() {
    let mock = Arc::new(MockCompletionAdapter::failing().with_script([
        MockReply::Text(r#"{"score":0.1,"label":"neutral","emotions":[]}"#.into()),
        MockReply::Text(
            r#"{"score":0.1,"label":"neutral","emotions":["a","b","c","d","e","f"]}"#.into(),
        ),
    ]));
    let service = service(&mock);

    assert!(service.analyze_sentiment_with_provenance("x").await.is_fallback());
    assert!(service.analyze_sentiment_with_provenance("x").await.is_fallback());
}

#[tokio::test]
async fn empty_text_sentiment_returned_unmodified() {
    let mock = Arc::new(MockCompletionAdapter::replying(
        r#"{"score":0,"label":"neutral","emotions":["calm"]}"#,
    ));

    let artifact = service(&mock).analyze_sentiment("").await;

    assert_eq!(
        artifact,
        SentimentArtifact {
            score: 0.0,
            label: SentimentLabel::Neutral,
            emotions: vec!["calm".into()],
        }
    );
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn model_insights_pass_through() {
    let mock = Arc::new(MockCompletionAdapter::replying(
        r#"{"strengths":["consistency","honesty","openness"],"recommendations":["write a gratitude list"],"emotionalTrend":"needs_attention"}"#,
    ));

    let artifact = service(&mock).generate_personal_insights(&activity()).await;

    assert_eq!(
        artifact,
        InsightArtifact {
            strengths: vec!["consistency".into(), "honesty".into(), "openness".into()],
            recommendations: vec!["write a gratitude list".into()],
            emotional_trend: EmotionalTrend::NeedsAttention,
        }
    );
    let prompt = &mock.requests()[0].prompt;
    assert!(prompt.contains("hopeful, tired"));
    assert!(prompt.contains("4 of 7"));
}

#[tokio::test]
async fn exactly_one_completion_per_call() {
    let mock = Arc::new(MockCompletionAdapter::failing());
    let service = service(&mock);

    service.generate_session_summary(&grief_circle()).await;
    assert_eq!(mock.call_count(), 1);
    service.analyze_sentiment("hello").await;
    assert_eq!(mock.call_count(), 2);
    service.generate_personal_insights(&activity()).await;
    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn concurrent_calls_share_one_service() {
    let mock = Arc::new(
        MockCompletionAdapter::replying(r#"{"score":-0.4,"label":"negative","emotions":["hurt"]}"#)
            .with_delay(20),
    );
    let service: Arc<dyn InsightPort> = Arc::new(service(&mock));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.analyze_sentiment(&format!("entry {i}")).await })
        })
        .collect();

    for handle in handles {
        let artifact = handle.await.unwrap();
        assert_eq!(artifact.label, SentimentLabel::Negative);
    }
    assert_eq!(mock.call_count(), 8);
}
