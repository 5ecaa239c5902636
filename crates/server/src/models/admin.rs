//! Admin credential domain types.

use chrono::{DateTime, Utc};

use matchday_core::AdminId;

/// An admin credential (domain type).
///
/// Provisioned out-of-band via the CLI; the web surface only ever reads
/// this table when matching a login attempt.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Unique admin ID.
    pub id: AdminId,
    /// Login username.
    pub username: String,
    /// When the credential was provisioned.
    pub created_at: DateTime<Utc>,
}
