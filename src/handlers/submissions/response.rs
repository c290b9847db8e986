//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Submission;

/// Submission as exposed on the wire (camelCase, dashboard contract)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub task_id: Uuid,
    pub link: String,
    pub status: String,
    pub points_awarded: Option<i64>,
    pub submitted_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            task_id: submission.task_id,
            link: submission.link,
            status: submission.status,
            points_awarded: submission.points_awarded,
            submitted_at: submission.submitted_at,
        }
    }
}

/// A representative's own submission history
#[derive(Debug, Serialize)]
pub struct OwnSubmissionsResponse {
    pub status: &'static str,
    pub submissions: Vec<SubmissionResponse>,
}
