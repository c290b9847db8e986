//! Representative repository

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Representative,
};

/// Repository for representative database operations
pub struct RepresentativeRepository;

impl RepresentativeRepository {
    /// Create a new representative
    ///
    /// The unique index on email rejects a second registration for the same
    /// identity atomically with the insert.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        email: &str,
        password_hash: &str,
        phone: &str,
        representative_type: &str,
        college: Option<&str>,
        school: Option<&str>,
        district: &str,
        state: &str,
        year_of_study: Option<&str>,
    ) -> AppResult<Representative> {
        let representative = sqlx::query_as::<_, Representative>(
            r#"
            INSERT INTO representatives (
                id, name, email, password_hash, phone, representative_type,
                college, school, district, state, year_of_study, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(phone)
        .bind(representative_type)
        .bind(college)
        .bind(school)
        .bind(district)
        .bind(state)
        .bind(year_of_study)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateIdentity
            }
            other => other.into(),
        })?;

        Ok(representative)
    }

    /// Find representative by email
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> AppResult<Option<Representative>> {
        let representative = sqlx::query_as::<_, Representative>(
            r#"SELECT * FROM representatives WHERE email = ?"#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(representative)
    }

    /// Update a representative's mutable profile fields
    ///
    /// Identity (email) and credentials are not touched here.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_profile(
        pool: &SqlitePool,
        id: &Uuid,
        name: &str,
        phone: &str,
        representative_type: &str,
        college: Option<&str>,
        school: Option<&str>,
        district: &str,
        state: &str,
        year_of_study: Option<&str>,
    ) -> AppResult<Representative> {
        let representative = sqlx::query_as::<_, Representative>(
            r#"
            UPDATE representatives
            SET
                name = ?,
                phone = ?,
                representative_type = ?,
                college = ?,
                school = ?,
                district = ?,
                state = ?,
                year_of_study = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(representative_type)
        .bind(college)
        .bind(school)
        .bind(district)
        .bind(state)
        .bind(year_of_study)
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(representative)
    }
}
