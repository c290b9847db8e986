//! Submission ledger handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Submission routes (representative session required)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/submit-task", post(handler::submit_task))
        .route("/submissions", get(handler::list_own_submissions))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
