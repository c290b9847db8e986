//! Task handler implementations

use axum::{extract::State, Json};

use crate::{error::AppResult, services::CatalogService, state::AppState};

use super::response::{TaskResponse, TasksListResponse};

/// List all tasks in stable creation order
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<Json<TasksListResponse>> {
    let tasks = CatalogService::list_tasks(state.db()).await?;

    Ok(Json(TasksListResponse {
        tasks: tasks.into_iter().map(TaskResponse::from).collect(),
    }))
}
