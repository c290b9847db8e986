//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    constants::roles,
    error::AppResult,
    services::SessionService,
    state::AppState,
};

use super::{
    request::{RegisterRequest, SignInRequest},
    response::{SignInResponse, StatusResponse},
};

/// Register a new representative
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<StatusResponse>)> {
    payload.validate()?;

    let representative = SessionService::register_representative(state.db(), &payload).await?;

    tracing::info!(email = %representative.email, "Representative registered");

    Ok((StatusCode::CREATED, Json(StatusResponse::success())))
}

/// Representative sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> AppResult<Json<SignInResponse>> {
    payload.validate()?;

    let (_, token, expires_in) = SessionService::sign_in_representative(
        state.db(),
        &state.config().jwt,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(SignInResponse {
        status: "success",
        token,
        role: roles::REPRESENTATIVE.to_string(),
        expires_in,
    }))
}

/// Administrator sign-in
///
/// Checks the administrator store only; a representative's credentials can
/// never authenticate here.
pub async fn admin_sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> AppResult<Json<SignInResponse>> {
    payload.validate()?;

    let (token, expires_in) = SessionService::sign_in_administrator(
        state.db(),
        &state.config().jwt,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(SignInResponse {
        status: "success",
        token,
        role: roles::ADMINISTRATOR.to_string(),
        expires_in,
    }))
}
