//! Session service
//!
//! Registration, authentication against the two disjoint identity stores,
//! and issuing/verifying the JWT session descriptors consumed by the
//! authorization gate.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    config::{AdminConfig, JwtConfig},
    constants::roles,
    db::repositories::{AdminRepository, RepresentativeRepository},
    error::{AppError, AppResult},
    handlers::auth::request::RegisterRequest,
    handlers::profile::request::UpdateProfileRequest,
    middleware::auth::Session,
    models::Representative,
    utils::validation,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // account id
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Session manager service
pub struct SessionService;

impl SessionService {
    /// Register a new representative
    pub async fn register_representative(
        pool: &SqlitePool,
        payload: &RegisterRequest,
    ) -> AppResult<Representative> {
        validation::validate_email(&payload.email)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_phone(&payload.phone)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_representative_type(&payload.representative_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // The unique email index still closes the race; this check exists to
        // answer fast with the specific conflict.
        if RepresentativeRepository::find_by_email(pool, &payload.email)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateIdentity);
        }

        let password_hash = Self::hash_password(&payload.password)?;

        RepresentativeRepository::create(
            pool,
            &validation::sanitize_string(&payload.name),
            &payload.email,
            &password_hash,
            &payload.phone,
            &payload.representative_type,
            payload.college.as_deref(),
            payload.school.as_deref(),
            &payload.district,
            &payload.state,
            payload.year_of_study.as_deref(),
        )
        .await
    }

    /// Authenticate a representative and issue a session token
    ///
    /// Only the representative store is consulted; an administrator email
    /// here fails with `InvalidCredentials` rather than crossing stores.
    pub async fn sign_in_representative(
        pool: &SqlitePool,
        jwt: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(Representative, String, i64)> {
        let representative = RepresentativeRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &representative.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let (token, expires_in) = Self::issue_token(
            &representative.id.to_string(),
            &representative.email,
            roles::REPRESENTATIVE,
            jwt,
        )?;

        Ok((representative, token, expires_in))
    }

    /// Authenticate an administrator and issue a session token
    pub async fn sign_in_administrator(
        pool: &SqlitePool,
        jwt: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(String, i64)> {
        let administrator = AdminRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &administrator.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Self::issue_token(
            &administrator.id.to_string(),
            &administrator.email,
            roles::ADMINISTRATOR,
            jwt,
        )
    }

    /// Read a representative profile
    ///
    /// Owner-only: the session must match the requested identity, except
    /// administrators, who may read any profile.
    pub async fn get_profile(
        pool: &SqlitePool,
        session: &Session,
        email: &str,
    ) -> AppResult<Representative> {
        session.authorize_identity(email)?;

        RepresentativeRepository::find_by_email(pool, email)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Update the session owner's mutable profile fields
    pub async fn update_profile(
        pool: &SqlitePool,
        session: &Session,
        payload: &UpdateProfileRequest,
    ) -> AppResult<Representative> {
        session.authorize(roles::REPRESENTATIVE)?;
        validation::validate_phone(&payload.phone)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_representative_type(&payload.representative_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        RepresentativeRepository::update_profile(
            pool,
            &session.id,
            &validation::sanitize_string(&payload.name),
            &payload.phone,
            &payload.representative_type,
            payload.college.as_deref(),
            payload.school.as_deref(),
            &payload.district,
            &payload.state,
            payload.year_of_study.as_deref(),
        )
        .await
    }

    /// Seed the administrator account from configuration, if present
    ///
    /// The administrator identity store is populated only here.
    pub async fn seed_administrator(pool: &SqlitePool, admin: &AdminConfig) -> AppResult<()> {
        match (&admin.email, &admin.password) {
            (Some(email), Some(password)) => {
                let password_hash = Self::hash_password(password)?;
                AdminRepository::create_if_absent(pool, email, &password_hash).await?;
                tracing::info!(email = %email, "Administrator account ensured");
                Ok(())
            }
            (None, None) => Ok(()),
            _ => Err(AppError::Configuration(
                "ADMIN_EMAIL and ADMIN_PASSWORD must be set together".to_string(),
            )),
        }
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Issue a signed session token
    fn issue_token(sub: &str, email: &str, role: &str, jwt: &JwtConfig) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(jwt.expiry_hours);
        let expires_in = jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: sub.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 1,
        }
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = SessionService::hash_password("Password123").unwrap();
        assert!(SessionService::verify_password("Password123", &hash).unwrap());
        assert!(!SessionService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_token_round_trip_preserves_role() {
        let jwt = jwt_config();
        let (token, _) =
            SessionService::issue_token("id-1", "a@x.com", roles::ADMINISTRATOR, &jwt).unwrap();
        let claims = SessionService::verify_token(&token, &jwt.secret).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, roles::ADMINISTRATOR);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let jwt = jwt_config();
        let (token, _) =
            SessionService::issue_token("id-1", "a@x.com", roles::REPRESENTATIVE, &jwt).unwrap();
        assert!(SessionService::verify_token(&token, "other-secret").is_err());
    }
}
