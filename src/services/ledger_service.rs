//! Submission ledger service

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{SubmissionRepository, TaskRepository},
    error::{AppError, AppResult},
    handlers::admin::response::ReviewSubmissionRow,
    middleware::auth::Session,
    models::Submission,
    utils::{time, validation},
};

/// Submission ledger service
pub struct LedgerService;

impl LedgerService {
    /// Record a representative's submission for a task
    ///
    /// Preconditions, in order: representative session; task exists and its
    /// deadline (if any) has not passed; link has a URL shape; no prior
    /// submission for this (task, representative) pair. The unique index in
    /// the store closes the duplicate race the pre-check cannot.
    pub async fn submit(
        pool: &SqlitePool,
        session: &Session,
        task_id: &Uuid,
        link: &str,
    ) -> AppResult<Submission> {
        session.authorize(roles::REPRESENTATIVE)?;

        let task = TaskRepository::find_by_id(pool, task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

        if !task.is_open(time::now_utc()) {
            return Err(AppError::Validation(
                "The task deadline has passed".to_string(),
            ));
        }

        validation::validate_link(link).map_err(|e| AppError::InvalidLink(e.to_string()))?;

        if SubmissionRepository::find_by_pair(pool, task_id, &session.id)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateSubmission);
        }

        SubmissionRepository::create(pool, task_id, &session.id, link).await
    }

    /// List the session owner's submissions
    pub async fn list_for_representative(
        pool: &SqlitePool,
        session: &Session,
    ) -> AppResult<Vec<Submission>> {
        session.authorize(roles::REPRESENTATIVE)?;
        SubmissionRepository::list_for_representative(pool, &session.id).await
    }

    /// List every submission with its task and submitter (administrator only)
    ///
    /// This is the review queue the scoring engine works from.
    pub async fn list_all(
        pool: &SqlitePool,
        session: &Session,
    ) -> AppResult<Vec<ReviewSubmissionRow>> {
        session.authorize(roles::ADMINISTRATOR)?;

        let rows = sqlx::query_as::<_, ReviewSubmissionRow>(
            r#"
            SELECT
                s.id AS id,
                r.email AS email,
                s.task_id AS task_id,
                t.title AS task_title,
                s.link AS link,
                s.status AS status,
                s.points_awarded AS points_awarded,
                s.submitted_at AS submitted_at
            FROM submissions s
            JOIN representatives r ON s.representative_id = r.id
            JOIN tasks t ON s.task_id = t.id
            ORDER BY s.submitted_at DESC, s.rowid DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
