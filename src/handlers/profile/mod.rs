//! Profile handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Profile routes, all session-gated
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(handler::get_profile).put(handler::update_profile))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
