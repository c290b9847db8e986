//! Business logic services
//!
//! One service per core component: sessions/identity, task catalog,
//! submission ledger, review & scoring, leaderboard.

mod catalog_service;
mod leaderboard_service;
mod ledger_service;
mod review_service;
mod session_service;

pub use catalog_service::CatalogService;
pub use leaderboard_service::LeaderboardService;
pub use ledger_service::LedgerService;
pub use review_service::ReviewService;
pub use session_service::{Claims, SessionService};
