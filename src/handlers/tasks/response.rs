//! Task response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Task;

/// Task as exposed on the wire (camelCase, dashboard contract)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub points: i64,
    pub deadline: Option<DateTime<Utc>>,
    pub submission_mode: String,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            points: task.points,
            deadline: task.deadline,
            submission_mode: task.submission_mode,
            created_at: task.created_at,
        }
    }
}

/// Task listing response
#[derive(Debug, Serialize)]
pub struct TasksListResponse {
    pub tasks: Vec<TaskResponse>,
}
