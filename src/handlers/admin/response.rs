//! Administrator response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A submission joined with its task and submitter for the review queue
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmissionRow {
    pub id: Uuid,
    pub email: String,
    pub task_id: Uuid,
    pub task_title: String,
    pub link: String,
    pub status: String,
    pub points_awarded: Option<i64>,
    pub submitted_at: DateTime<Utc>,
}

/// Review queue response
#[derive(Debug, Serialize)]
pub struct SubmissionsReviewResponse {
    pub status: &'static str,
    pub submissions: Vec<ReviewSubmissionRow>,
}
