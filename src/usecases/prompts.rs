//! Prompt builders. Pure functions from typed input to (system, user) prompts.
//!
//! Every input field is rendered, with explicit placeholders for unset
//! values, so the prompt shape does not change between calls.

use crate::domain::{
    EmotionalTrend, EngagementLevel, SentimentLabel, SessionDescriptor, TOTAL_JOURNEY_STEPS,
    UserActivitySnapshot,
};

pub const NO_NOTES: &str = "no notes provided";
pub const NO_DURATION: &str = "duration not specified";
pub const NO_EMOTIONS: &str = "no emotions recorded";
pub const EMPTY_TEXT: &str = "(empty entry)";

const JSON_ONLY: &str =
    "Respond with a single JSON object containing exactly these fields. No markdown, no text outside the JSON.";

/// System instruction and user prompt for one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn session_summary_prompt(session: &SessionDescriptor) -> PromptPair {
    let notes = session
        .facilitator_notes
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(NO_NOTES);
    let duration = session
        .duration_minutes
        .map(|m| format!("{} minutes", m))
        .unwrap_or_else(|| NO_DURATION.to_string());

    let user = format!(
        r#"Summarize the following group session of a forgiveness journey program.

Session title: {title}
Session type: {session_type}
Scheduled time: {scheduled}
Duration: {duration}
Participants: {participants}
Facilitator notes: {notes}

{json_only}
- "summary": string. Two or three sentences describing what the session covered.
- "keyTopics": array of strings, at least one. The main themes discussed.
- "actionItems": array of strings. Concrete practices participants can take away.
- "nextStepsRecommendations": string. What the group should focus on next time.
- "engagementLevel": one of {levels}. Estimated participant engagement."#,
        title = session.title,
        session_type = session.session_type,
        scheduled = session.scheduled_time.format("%Y-%m-%d %H:%M UTC"),
        duration = duration,
        participants = session.participant_count,
        notes = notes,
        json_only = JSON_ONLY,
        levels = quoted(EngagementLevel::LABELS),
    );

    PromptPair {
        system: "You are a compassionate facilitator assistant for a forgiveness and emotional \
                 healing program. You write concise, warm, factual summaries of group sessions \
                 and never invent details that are not supported by the session information."
            .to_string(),
        user,
    }
}

pub fn sentiment_prompt(text: &str) -> PromptPair {
    let text = if text.trim().is_empty() {
        EMPTY_TEXT
    } else {
        text
    };

    let user = format!(
        r#"Analyze the emotional sentiment of the following journal or feedback text.

Text:
---
{text}
---

{json_only}
- "score": number between -1.0 (very negative) and 1.0 (very positive).
- "label": one of {labels}. Overall sentiment.
- "emotions": array of 1 to 5 strings. The dominant emotions expressed."#,
        text = text,
        json_only = JSON_ONLY,
        labels = quoted(SentimentLabel::LABELS),
    );

    PromptPair {
        system: "You are an empathetic sentiment analyst for a forgiveness journaling app. \
                 You assess the emotional tone of personal writing consistently and without judgement."
            .to_string(),
        user,
    }
}

pub fn personal_insights_prompt(activity: &UserActivitySnapshot) -> PromptPair {
    let emotions = if activity.recent_emotions.is_empty() {
        NO_EMOTIONS.to_string()
    } else {
        activity.recent_emotions.join(", ")
    };

    let user = format!(
        r#"Generate personal growth insights for a participant of a forgiveness journey.

Journal entries written: {journal}
Journey steps completed: {steps} of {total}
Group sessions attended: {attendance}
Recent emotions: {emotions}

{json_only}
- "strengths": array of 3 to 4 strings. Strengths the participant is showing.
- "recommendations": array of strings. Gentle, specific suggestions for the next week.
- "emotionalTrend": one of {trends}. Direction of the participant's emotional state."#,
        journal = activity.journal_entries,
        steps = activity.completed_steps,
        total = TOTAL_JOURNEY_STEPS,
        attendance = activity.session_attendance,
        emotions = emotions,
        json_only = JSON_ONLY,
        trends = quoted(EmotionalTrend::LABELS),
    );

    PromptPair {
        system: "You are a supportive personal growth coach for a forgiveness and healing \
                 program. You encourage progress, stay grounded in the activity data you are \
                 given, and never give medical advice."
            .to_string(),
        user,
    }
}

fn quoted(labels: &[&str]) -> String {
    labels
        .iter()
        .map(|l| format!("\"{}\"", l))
        .collect::<Vec<_>>()
        .join(", ")
}
