//! Domain models
//!
//! Database models and domain enums shared across services and handlers.

mod admin;
mod leaderboard;
mod representative;
mod submission;
mod task;

pub use admin::Administrator;
pub use leaderboard::LeaderboardEntry;
pub use representative::{Representative, RepresentativeType};
pub use submission::{Submission, SubmissionStatus};
pub use task::{SubmissionMode, Task};
