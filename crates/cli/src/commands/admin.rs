//! Admin credential provisioning.
//!
//! Admins are never self-registered; this command is the only write path
//! into the `admin_credential` table.
//!
//! # Usage
//!
//! ```bash
//! matchday-cli admin create -u gatekeeper -p <password>
//! ```

use super::{CliError, connect};

/// Provision a new admin credential.
///
/// # Arguments
///
/// * `username` - Admin's login username
/// * `password` - Admin's password (stored as plaintext; the login
///   handler compares it verbatim)
///
/// # Returns
///
/// The ID of the created credential.
///
/// # Errors
///
/// Returns `CliError` if the input is blank or the insert fails.
pub async fn create(username: &str, password: &str) -> Result<i32, CliError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(CliError::InvalidInput(
            "username and password must be non-empty".to_string(),
        ));
    }

    let pool = connect().await?;

    tracing::info!("Creating admin credential: {}", username);

    let id = sqlx::query_scalar::<_, i32>(
        r"
        INSERT INTO admin_credential (username, password)
        VALUES ($1, $2)
        RETURNING id
        ",
    )
    .bind(username.trim())
    .bind(password)
    .fetch_one(&pool)
    .await?;

    tracing::info!("Admin credential created! ID: {}, Username: {}", id, username);

    Ok(id)
}
