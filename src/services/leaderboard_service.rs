//! Leaderboard service

use sqlx::SqlitePool;

use crate::{
    db::repositories::SubmissionRepository,
    error::AppResult,
    models::LeaderboardEntry,
};

/// Leaderboard aggregator
pub struct LeaderboardService;

impl LeaderboardService {
    /// Rank all representatives by total awarded points, descending
    ///
    /// Derived on read from scored submissions; nothing is cached, so every
    /// read reflects the awards committed so far.
    pub async fn rank(pool: &SqlitePool) -> AppResult<Vec<LeaderboardEntry>> {
        SubmissionRepository::leaderboard(pool).await
    }
}
