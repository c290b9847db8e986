//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

/// Task submission request (camelCase wire contract)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTaskRequest {
    /// Client-cached email; tolerated but re-checked against the session,
    /// never trusted on its own.
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub task_id: String,

    #[validate(length(min = 1))]
    pub link: String,
}
