//! Submission handler implementations

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::auth::response::StatusResponse,
    middleware::auth::Session,
    services::LedgerService,
    state::AppState,
};

use super::{
    request::SubmitTaskRequest,
    response::{OwnSubmissionsResponse, SubmissionResponse},
};

/// Submit a proof link for a task
pub async fn submit_task(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubmitTaskRequest>,
) -> AppResult<(StatusCode, Json<StatusResponse>)> {
    payload.validate()?;

    // The body email is a client-side cache; the session is authoritative
    // and may only submit as itself.
    session.authorize_identity(&payload.email)?;

    let task_id = Uuid::parse_str(&payload.task_id)
        .map_err(|_| AppError::NotFound("Task not found".to_string()))?;

    let submission = LedgerService::submit(state.db(), &session, &task_id, &payload.link).await?;

    tracing::info!(
        submission_id = %submission.id,
        task_id = %task_id,
        email = %session.email,
        "Submission recorded"
    );

    Ok((StatusCode::CREATED, Json(StatusResponse::success())))
}

/// List the signed-in representative's submissions
pub async fn list_own_submissions(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<OwnSubmissionsResponse>> {
    let submissions = LedgerService::list_for_representative(state.db(), &session).await?;

    Ok(Json(OwnSubmissionsResponse {
        status: "success",
        submissions: submissions.into_iter().map(SubmissionResponse::from).collect(),
    }))
}
