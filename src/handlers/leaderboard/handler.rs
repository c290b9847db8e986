//! Leaderboard handler implementations

use axum::{extract::State, Json};

use crate::{error::AppResult, services::LeaderboardService, state::AppState};

use super::response::LeaderboardResponse;

/// Public standings: every representative, highest points first
pub async fn leaderboard(State(state): State<AppState>) -> AppResult<Json<LeaderboardResponse>> {
    let leaderboard = LeaderboardService::rank(state.db()).await?;

    Ok(Json(LeaderboardResponse {
        status: "success",
        leaderboard,
    }))
}
