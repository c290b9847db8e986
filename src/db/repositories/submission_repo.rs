//! Submission repository

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{LeaderboardEntry, Representative, Submission, SubmissionStatus},
};

/// A representative joined with its summed awarded points
#[derive(FromRow)]
struct LeaderboardRow {
    #[sqlx(flatten)]
    representative: Representative,
    points: i64,
}

/// Repository for submission ledger database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new pending submission
    ///
    /// The UNIQUE (task_id, representative_id) index makes the duplicate
    /// check and the insert one atomic statement: of two racing submissions
    /// for the same pair exactly one lands, the other gets
    /// `DuplicateSubmission` here.
    pub async fn create(
        pool: &SqlitePool,
        task_id: &Uuid,
        representative_id: &Uuid,
        link: &str,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (id, task_id, representative_id, link, status, points_awarded, submitted_at)
            VALUES (?, ?, ?, ?, ?, NULL, ?)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(task_id)
        .bind(representative_id)
        .bind(link)
        .bind(SubmissionStatus::Pending.as_str())
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateSubmission
            }
            other => other.into(),
        })?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &SqlitePool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = ?"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(submission)
    }

    /// Find the submission for a (task, representative) pair
    pub async fn find_by_pair(
        pool: &SqlitePool,
        task_id: &Uuid,
        representative_id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE task_id = ? AND representative_id = ?"#,
        )
        .bind(task_id)
        .bind(representative_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// List a representative's own submissions, newest first
    pub async fn list_for_representative(
        pool: &SqlitePool,
        representative_id: &Uuid,
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE representative_id = ?
            ORDER BY submitted_at DESC, rowid DESC
            "#,
        )
        .bind(representative_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// Transition a pending submission to scored with the awarded points
    ///
    /// The status guard in the WHERE clause makes check-and-transition one
    /// atomic statement; a row already scored is left untouched and reported
    /// through the affected-row count.
    pub async fn award(pool: &SqlitePool, id: &Uuid, points: i64) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE submissions
            SET status = ?, points_awarded = ?
            WHERE id = ? AND status = ?
            "#,
        )
        .bind(SubmissionStatus::Scored.as_str())
        .bind(points)
        .bind(id)
        .bind(SubmissionStatus::Pending.as_str())
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Rank all representatives by summed awarded points
    ///
    /// Every representative appears, zero-scored ones at 0. Ties break by
    /// earliest registration, then id, keeping the order deterministic.
    pub async fn leaderboard(pool: &SqlitePool) -> AppResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT r.*, COALESCE(SUM(s.points_awarded), 0) AS points
            FROM representatives r
            LEFT JOIN submissions s
                ON s.representative_id = r.id AND s.status = ?
            GROUP BY r.id
            ORDER BY points DESC, r.created_at ASC, r.id ASC
            "#,
        )
        .bind(SubmissionStatus::Scored.as_str())
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| LeaderboardEntry {
                college: row.representative.affiliation().to_string(),
                name: row.representative.name,
                points: row.points,
            })
            .collect())
    }
}
