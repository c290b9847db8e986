//! Administrator handler implementations

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::auth::response::StatusResponse,
    middleware::auth::Session,
    services::{CatalogService, LedgerService, ReviewService},
    state::AppState,
};

use super::{
    request::{UpdatePointsRequest, UploadTaskRequest},
    response::SubmissionsReviewResponse,
};

/// Create a new task
pub async fn upload_task(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UploadTaskRequest>,
) -> AppResult<(StatusCode, Json<StatusResponse>)> {
    payload.validate()?;

    let task = CatalogService::create_task(state.db(), &session, &payload).await?;

    tracing::info!(task_id = %task.id, title = %task.title, "Task created");

    Ok((StatusCode::CREATED, Json(StatusResponse::success())))
}

/// List every submission for review
pub async fn list_submissions(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<SubmissionsReviewResponse>> {
    let submissions = LedgerService::list_all(state.db(), &session).await?;

    Ok(Json(SubmissionsReviewResponse {
        status: "success",
        submissions,
    }))
}

/// Award points to a pending submission
pub async fn update_points(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdatePointsRequest>,
) -> AppResult<Json<StatusResponse>> {
    payload.validate()?;

    let task_id = Uuid::parse_str(&payload.task_id)
        .map_err(|_| AppError::NotFound("Submission not found".to_string()))?;

    let submission = ReviewService::award_points_by_pair(
        state.db(),
        &session,
        &payload.email,
        &task_id,
        payload.points_awarded,
    )
    .await?;

    tracing::info!(
        submission_id = %submission.id,
        email = %payload.email,
        points = payload.points_awarded,
        "Points awarded"
    );

    Ok(Json(StatusResponse::success()))
}
