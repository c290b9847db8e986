//! Representative model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Representative database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Representative {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: String,
    pub representative_type: String,
    pub college: Option<String>,
    pub school: Option<String>,
    pub district: String,
    pub state: String,
    pub year_of_study: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Representative {
    /// Institution name to display: college for college representatives,
    /// school otherwise. Empty strings from the form count as absent.
    pub fn affiliation(&self) -> &str {
        self.college
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.school.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("")
    }
}

/// Representative type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepresentativeType {
    College,
    School,
}

impl RepresentativeType {
    /// Get type as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::College => "college",
            Self::School => "school",
        }
    }

    /// Parse type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "college" => Some(Self::College),
            "school" => Some(Self::School),
            _ => None,
        }
    }
}

impl std::fmt::Display for RepresentativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
