//! Registrant repository for database operations.
//!
//! Email uniqueness is enforced by a pre-insert existence check in the
//! signup handler, not by a storage constraint; concurrent signups with the
//! same email can therefore both insert.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use matchday_core::{Email, RegistrantId};

use super::RepositoryError;
use crate::models::Registrant;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` registrant queries.
#[derive(Debug, sqlx::FromRow)]
struct RegistrantRow {
    id: i32,
    fullname: String,
    email: String,
    phone: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<RegistrantRow> for Registrant {
    type Error = RepositoryError;

    fn try_from(row: RegistrantRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: RegistrantId::new(row.id),
            fullname: row.fullname,
            email,
            phone: row.phone,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Query Parameters
// =============================================================================

/// Sort order for the registrant listing, by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse the `sort` query parameter: `"asc"` sorts ascending, anything
    /// else (including absence) sorts descending.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("asc") => Self::Ascending,
            _ => Self::Descending,
        }
    }

    const fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Parameters for a registrant listing query.
#[derive(Debug, Clone)]
pub struct ListParams {
    /// Substring to match (case-insensitive) against fullname, email, or
    /// phone. Empty or absent matches everything.
    pub search: Option<String>,
    /// Sort order by creation time.
    pub sort: SortOrder,
    /// 1-based page number.
    pub page: i64,
    /// Records per page.
    pub limit: i64,
}

impl ListParams {
    fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit
    }

    /// The ILIKE pattern for this query. Matches everything when no search
    /// text was supplied (the pattern matches the empty string).
    fn pattern(&self) -> String {
        format!("%{}%", escape_like(self.search.as_deref().unwrap_or("")))
    }
}

/// One page of the registrant listing plus the total match count.
#[derive(Debug)]
pub struct RegistrantPage {
    pub registrants: Vec<Registrant>,
    /// Total number of records matching the search, across all pages.
    pub total: i64,
}

/// Escape `LIKE` metacharacters in user-supplied search text so it matches
/// literally.
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for registrant database operations.
pub struct RegistrantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrantRepository<'a> {
    /// Create a new registrant repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a registrant by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<Registrant>, RepositoryError> {
        let row = sqlx::query_as::<_, RegistrantRow>(
            r"
            SELECT id, fullname, email, phone, created_at
            FROM registrant
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Insert a new registrant with a server-assigned creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        fullname: &str,
        email: &Email,
        phone: &str,
    ) -> Result<Registrant, RepositoryError> {
        let row = sqlx::query_as::<_, RegistrantRow>(
            r"
            INSERT INTO registrant (fullname, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, fullname, email, phone, created_at
            ",
        )
        .bind(fullname)
        .bind(email)
        .bind(phone)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// List one page of registrants matching the search, plus the total
    /// match count for pagination.
    ///
    /// The search is a case-insensitive substring match against fullname OR
    /// email OR phone. Zero matches is an empty page with total 0, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if any row is invalid.
    pub async fn list(&self, params: &ListParams) -> Result<RegistrantPage, RepositoryError> {
        let pattern = params.pattern();

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM registrant
            WHERE fullname ILIKE $1 OR email ILIKE $1 OR phone ILIKE $1
            ",
        )
        .bind(&pattern)
        .fetch_one(self.pool)
        .await?;

        let query = format!(
            r"
            SELECT id, fullname, email, phone, created_at
            FROM registrant
            WHERE fullname ILIKE $1 OR email ILIKE $1 OR phone ILIKE $1
            ORDER BY created_at {}
            LIMIT $2 OFFSET $3
            ",
            params.sort.as_sql()
        );

        let rows = sqlx::query_as::<_, RegistrantRow>(&query)
            .bind(&pattern)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(self.pool)
            .await?;

        let registrants = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RegistrantPage { registrants, total })
    }

    /// Apply a partial update to the registrant with the given email.
    ///
    /// Only supplied fields change; email is immutable. Returns `true` when
    /// a row was actually modified. A no-op update (all supplied values
    /// already current) matches zero rows, mirroring the store's
    /// modified-count signal, and is indistinguishable from a missing
    /// record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        email: &Email,
        fullname: Option<&str>,
        phone: Option<&str>,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE registrant
            SET fullname = COALESCE($2, fullname),
                phone = COALESCE($3, phone)
            WHERE email = $1
              AND (fullname IS DISTINCT FROM COALESCE($2, fullname)
                   OR phone IS DISTINCT FROM COALESCE($3, phone))
            ",
        )
        .bind(email)
        .bind(fullname)
        .bind(phone)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete the registrant with the given email.
    ///
    /// Returns `true` when a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM registrant WHERE email = $1")
            .bind(email)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
