//! Leaderboard handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Leaderboard routes (public)
pub fn routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(handler::leaderboard))
}
