//! Authentication response DTOs

use serde::Serialize;

/// Bare success acknowledgement
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

/// Sign-in response carrying the session token
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub status: &'static str,
    pub token: String,
    pub role: String,
    pub expires_in: i64,
}
