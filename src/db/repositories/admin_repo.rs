//! Administrator repository

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{error::AppResult, models::Administrator};

/// Repository for administrator database operations
pub struct AdminRepository;

impl AdminRepository {
    /// Seed an administrator account if the email is not already present.
    ///
    /// Administrators only come into existence this way; there is no
    /// registration route for them.
    pub async fn create_if_absent(
        pool: &SqlitePool,
        email: &str,
        password_hash: &str,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO administrators (id, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Find administrator by email
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> AppResult<Option<Administrator>> {
        let administrator = sqlx::query_as::<_, Administrator>(
            r#"SELECT * FROM administrators WHERE email = ?"#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(administrator)
    }
}
