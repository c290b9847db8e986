//! Task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Task database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub points: i64,
    /// Absent deadline means the task is open-ended.
    pub deadline: Option<DateTime<Utc>>,
    pub submission_mode: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Whether the task still accepts submissions.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) => now <= deadline,
            None => true,
        }
    }
}

/// Task submission mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionMode {
    Individual,
    Team,
}

impl SubmissionMode {
    /// Get mode as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Team => "team",
        }
    }

    /// Parse mode from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "individual" => Some(Self::Individual),
            "team" => Some(Self::Team),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task(deadline: Option<DateTime<Utc>>) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            description: "D".to_string(),
            points: 50,
            deadline,
            submission_mode: "individual".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_open_ended_task_never_closes() {
        assert!(task(None).is_open(Utc::now() + Duration::days(3650)));
    }

    #[test]
    fn test_deadline_closes_task() {
        let now = Utc::now();
        assert!(task(Some(now + Duration::hours(1))).is_open(now));
        assert!(!task(Some(now - Duration::hours(1))).is_open(now));
    }

    #[test]
    fn test_submission_mode_round_trip() {
        assert_eq!(SubmissionMode::parse("individual"), Some(SubmissionMode::Individual));
        assert_eq!(SubmissionMode::parse("team"), Some(SubmissionMode::Team));
        assert_eq!(SubmissionMode::parse("group"), None);
    }
}
