//! Task catalog handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Task routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/tasks", get(handler::list_tasks))
}
