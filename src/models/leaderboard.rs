//! Leaderboard entry model

use serde::{Deserialize, Serialize};

/// A derived leaderboard row: never stored, recomputed on read by summing
/// points awarded across a representative's scored submissions. `college`
/// carries the representative's displayed affiliation, school or college.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub college: String,
    pub points: i64,
}
