//! Review & scoring service

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{RepresentativeRepository, SubmissionRepository},
    error::{AppError, AppResult},
    middleware::auth::Session,
    models::{Submission, SubmissionStatus},
    utils::validation,
};

/// Review & scoring engine
pub struct ReviewService;

impl ReviewService {
    /// Award points to a pending submission (administrator only)
    ///
    /// A terminal one-shot action: the guarded UPDATE transitions
    /// `pending -> scored` atomically, so of two racing awards exactly one
    /// applies and the other sees `AlreadyScored` with the first value
    /// intact. There is no un-score.
    pub async fn award_points(
        pool: &SqlitePool,
        session: &Session,
        submission_id: &Uuid,
        points: i64,
    ) -> AppResult<Submission> {
        session.authorize(roles::ADMINISTRATOR)?;

        validation::validate_awarded_points(points)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let rows = SubmissionRepository::award(pool, submission_id, points).await?;

        if rows == 0 {
            // The guard failed: either the row is gone or it already left
            // the pending state. Anything else is a corrupt ledger row.
            return match SubmissionRepository::find_by_id(pool, submission_id).await? {
                Some(existing)
                    if SubmissionStatus::parse(&existing.status)
                        .is_some_and(|s| s.is_terminal()) =>
                {
                    Err(AppError::AlreadyScored)
                }
                Some(existing) => Err(AppError::Database(format!(
                    "submission {} has unknown status {}",
                    existing.id, existing.status
                ))),
                None => Err(AppError::NotFound("Submission not found".to_string())),
            };
        }

        SubmissionRepository::find_by_id(pool, submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// Award points addressed by (representative email, task id)
    ///
    /// The review UI identifies submissions this way; resolve the pair to
    /// the ledger row and award on its id.
    pub async fn award_points_by_pair(
        pool: &SqlitePool,
        session: &Session,
        email: &str,
        task_id: &Uuid,
        points: i64,
    ) -> AppResult<Submission> {
        session.authorize(roles::ADMINISTRATOR)?;

        let representative = RepresentativeRepository::find_by_email(pool, email)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let submission = SubmissionRepository::find_by_pair(pool, task_id, &representative.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        Self::award_points(pool, session, &submission.id, points).await
    }
}
