//! Crewboard: task tracking and scoring for the campus representative
//! program.
//!
//! Representatives register and sign in, pick tasks from the catalog,
//! submit proof links, and climb a public leaderboard as administrators
//! review and score their submissions.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", handlers::routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
