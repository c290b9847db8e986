//! Leaderboard response DTOs

use serde::Serialize;

use crate::models::LeaderboardEntry;

/// Leaderboard envelope
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub status: &'static str,
    pub leaderboard: Vec<LeaderboardEntry>,
}
