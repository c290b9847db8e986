//! Authentication middleware
//!
//! Every gated route re-derives the caller's session from the bearer token;
//! client-held role flags are never trusted.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    services::SessionService,
    state::AppState,
};

/// Authenticated session extracted from the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl Session {
    /// The single authorization gate: every privileged operation calls this
    /// before mutating state or returning privileged data.
    pub fn authorize(&self, required_role: &str) -> AppResult<()> {
        if self.role == required_role {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "This operation requires the {} role",
                required_role
            )))
        }
    }

    /// Owner check for per-identity reads and writes: the session may only
    /// touch its own profile and submissions. Administrators may read all.
    pub fn authorize_identity(&self, email: &str) -> AppResult<()> {
        if self.role == roles::ADMINISTRATOR || self.email == email {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "This operation is limited to your own account".to_string(),
            ))
        }
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware
///
/// Verifies the bearer token and attaches the resulting `Session` to the
/// request; gated handlers then extract it.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(auth_header) = auth_header else {
        debug!(path = %path, "Auth failed: no Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %path, "Auth failed: expected 'Bearer <token>'");
        return Err(AppError::Unauthorized);
    };

    let claims = SessionService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: token verification failed");
        e
    })?;

    let id = Uuid::parse_str(&claims.sub).map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: invalid id in token");
        AppError::InvalidToken
    })?;

    let session = Session {
        id,
        email: claims.email,
        role: claims.role,
    };

    debug!(path = %path, email = %session.email, role = %session.role, "Session authenticated");

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
