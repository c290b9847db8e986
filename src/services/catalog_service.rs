//! Task catalog service

use sqlx::SqlitePool;

use crate::{
    constants::roles,
    db::repositories::TaskRepository,
    error::{AppError, AppResult},
    handlers::admin::request::UploadTaskRequest,
    middleware::auth::Session,
    models::{SubmissionMode, Task},
    utils::{time, validation},
};

/// Task catalog service
pub struct CatalogService;

impl CatalogService {
    /// Create a new task (administrator only)
    pub async fn create_task(
        pool: &SqlitePool,
        session: &Session,
        payload: &UploadTaskRequest,
    ) -> AppResult<Task> {
        session.authorize(roles::ADMINISTRATOR)?;

        let title = validation::validate_task_title(&payload.title)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let description = validation::validate_task_description(&payload.description)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        validation::validate_task_points(payload.points)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // An absent or empty mode from the form means individual
        let submission_mode = match payload.submission_type.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => SubmissionMode::parse(raw).ok_or_else(|| {
                AppError::Validation(format!("Unknown submission mode: {}", raw))
            })?,
            None => SubmissionMode::Individual,
        };

        // Empty deadline from the form means the task is open-ended
        let deadline = match payload.deadline.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => Some(time::parse_deadline(raw).ok_or_else(|| {
                AppError::Validation(format!("Unrecognized deadline format: {}", raw))
            })?),
            None => None,
        };

        TaskRepository::create(
            pool,
            &title,
            &description,
            payload.points,
            deadline,
            submission_mode.as_str(),
        )
        .await
    }

    /// List all tasks in stable creation order
    pub async fn list_tasks(pool: &SqlitePool) -> AppResult<Vec<Task>> {
        TaskRepository::list(pool).await
    }
}
