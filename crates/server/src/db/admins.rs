//! Admin credential repository for database operations.
//!
//! Credentials are provisioned out-of-band via the CLI; this repository
//! only reads. Passwords are stored and compared as plaintext.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use matchday_core::AdminId;

use super::RepositoryError;
use crate::models::AdminUser;

/// Internal row type for `PostgreSQL` admin credential queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: i32,
    username: String,
    created_at: DateTime<Utc>,
}

impl From<AdminRow> for AdminUser {
    fn from(row: AdminRow) -> Self {
        Self {
            id: AdminId::new(row.id),
            username: row.username,
            created_at: row.created_at,
        }
    }
}

/// Repository for admin credential database operations.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin credential repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the admin whose username AND password exactly match the input.
    ///
    /// A single combined-filter query; no match means bad credentials.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            SELECT id, username, created_at
            FROM admin_credential
            WHERE username = $1 AND password = $2
            ",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
