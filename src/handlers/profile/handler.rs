//! Profile handler implementations

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::Session,
    services::SessionService,
    state::AppState,
};

use super::{
    request::{ProfileQuery, UpdateProfileRequest},
    response::{ProfileBody, ProfileResponse},
};

/// Read a representative profile
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProfileQuery>,
) -> AppResult<Json<ProfileResponse>> {
    let representative = SessionService::get_profile(state.db(), &session, &query.email).await?;

    Ok(Json(ProfileResponse {
        status: "success",
        profile: ProfileBody::from(representative),
    }))
}

/// Update the signed-in representative's profile
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    payload.validate()?;

    let representative = SessionService::update_profile(state.db(), &session, &payload).await?;

    tracing::info!(email = %representative.email, "Profile updated");

    Ok(Json(ProfileResponse {
        status: "success",
        profile: ProfileBody::from(representative),
    }))
}
