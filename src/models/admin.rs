//! Administrator model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Administrator database model
///
/// Administrators live in their own identity store, disjoint from
/// representatives; they are seeded out-of-band, never self-registered.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Administrator {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
