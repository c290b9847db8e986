//! Administrator handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Admin routes
///
/// The session middleware is layered on in `handlers::routes`; the services
/// behind these handlers re-check the administrator role themselves, so no
/// call path can skip the gate.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload-task", post(handler::upload_task))
        .route("/submissions", get(handler::list_submissions))
        .route("/update-points", post(handler::update_points))
}
