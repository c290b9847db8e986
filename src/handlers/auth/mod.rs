//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Registration and sign-in routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submit-form", post(handler::register))
        .route("/sign-in", post(handler::sign_in))
        .route("/admin-sign-in", post(handler::admin_sign_in))
}
