//! Domain entities. Input values supplied by the caller.
//!
//! No persistence here: the caller builds these from its own records and
//! hands them over for a single generation call.

use super::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of steps in the forgiveness journey.
pub const TOTAL_JOURNEY_STEPS: u8 = 7;

/// Metadata of a group session to be summarized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDescriptor {
    pub title: String,
    #[serde(default)]
    pub facilitator_notes: Option<String>,
    pub participant_count: u32,
    pub session_type: String,
    pub scheduled_time: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Read-only activity aggregate for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivitySnapshot {
    pub journal_entries: u32,
    /// Completed journey steps, `0..=TOTAL_JOURNEY_STEPS`.
    pub completed_steps: u8,
    pub session_attendance: u32,
    #[serde(default)]
    pub recent_emotions: Vec<String>,
}

impl UserActivitySnapshot {
    pub fn new(
        journal_entries: u32,
        completed_steps: u8,
        session_attendance: u32,
        recent_emotions: Vec<String>,
    ) -> Result<Self, DomainError> {
        let snapshot = Self {
            journal_entries,
            completed_steps,
            session_attendance,
            recent_emotions,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the step range. Needed for snapshots that arrive through serde.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.completed_steps > TOTAL_JOURNEY_STEPS {
            return Err(DomainError::InvalidInput(format!(
                "completed_steps must be at most {}, got {}",
                TOTAL_JOURNEY_STEPS, self.completed_steps
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_accepts_full_journey() {
        let snapshot = UserActivitySnapshot::new(12, 7, 3, vec!["hopeful".into()]).unwrap();
        assert_eq!(snapshot.completed_steps, TOTAL_JOURNEY_STEPS);
    }

    #[test]
    fn test_snapshot_rejects_step_overflow() {
        let err = UserActivitySnapshot::new(0, 8, 0, Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_session_descriptor_from_camel_case_json() {
        let json = r#"{
            "title": "Grief Circle",
            "participantCount": 6,
            "sessionType": "grief",
            "scheduledTime": "2025-01-10T18:00:00Z"
        }"#;
        let session: SessionDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(session.title, "Grief Circle");
        assert!(session.facilitator_notes.is_none());
        assert!(session.duration_minutes.is_none());
    }
}
