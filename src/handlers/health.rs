//! Health check handler

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{db::test_connection, error::AppResult, state::AppState};

/// Liveness probe; verifies the database answers
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<Value>> {
    test_connection(state.db()).await?;

    Ok(Json(json!({
        "status": "ok",
        "service": "crewboard",
    })))
}
