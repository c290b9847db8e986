//! HTTP request handlers

pub mod admin;
pub mod auth;
pub mod health;
pub mod leaderboard;
pub mod profile;
pub mod submissions;
pub mod tasks;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Assemble all routes under one router
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth::routes())
        .merge(tasks::routes())
        .merge(leaderboard::routes())
        .merge(profile::routes(state.clone()))
        .merge(submissions::routes(state.clone()))
        .nest(
            "/admin",
            admin::routes().route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}
