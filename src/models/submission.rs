//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::statuses;

/// Submission database model
///
/// At most one row exists per (task, representative) pair; the unique index
/// in the store enforces this atomically with the insert.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub task_id: Uuid,
    pub representative_id: Uuid,
    pub link: String,
    pub status: String,
    pub points_awarded: Option<i64>,
    pub submitted_at: DateTime<Utc>,
}

/// Submission status enum
///
/// The only transition is `pending -> scored`; scored is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Pending,
    Scored,
}

impl SubmissionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => statuses::PENDING,
            Self::Scored => statuses::SCORED,
        }
    }

    /// Parse status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            statuses::PENDING => Some(Self::Pending),
            statuses::SCORED => Some(Self::Scored),
            _ => None,
        }
    }

    /// Check if this status is terminal (no further transitions)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Scored)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(SubmissionStatus::parse("pending"), Some(SubmissionStatus::Pending));
        assert_eq!(SubmissionStatus::parse("scored"), Some(SubmissionStatus::Scored));
        assert_eq!(SubmissionStatus::parse("rejected"), None);
    }

    #[test]
    fn test_scored_is_terminal() {
        assert!(!SubmissionStatus::Pending.is_terminal());
        assert!(SubmissionStatus::Scored.is_terminal());
    }
}
