//! Task repository

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{error::AppResult, models::Task};

/// Repository for task catalog database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Create a new task
    pub async fn create(
        pool: &SqlitePool,
        title: &str,
        description: &str,
        points: i64,
        deadline: Option<DateTime<Utc>>,
        submission_mode: &str,
    ) -> AppResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (id, title, description, points, deadline, submission_mode, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .bind(points)
        .bind(deadline)
        .bind(submission_mode)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Find task by ID
    pub async fn find_by_id(pool: &SqlitePool, id: &Uuid) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(r#"SELECT * FROM tasks WHERE id = ?"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(task)
    }

    /// List all tasks, oldest first
    ///
    /// Ordering must be stable; creation time ascending, insertion order as
    /// the same-instant tie-break.
    pub async fn list(pool: &SqlitePool) -> AppResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"SELECT * FROM tasks ORDER BY created_at ASC, rowid ASC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }
}
