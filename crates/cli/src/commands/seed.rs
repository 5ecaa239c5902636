//! Seed the database with demo registrants.
//!
//! Useful for trying the admin panel's search and pagination against a
//! populated table.
//!
//! # Usage
//!
//! ```bash
//! matchday-cli seed --count 15
//! ```

use matchday_core::Email;

use super::{CliError, connect};

/// A small roster to cycle through when generating demo names.
const ROSTER: &[&str] = &[
    "Alex Morgan",
    "Birgit Prinz",
    "Carlos Valderrama",
    "Didier Drogba",
    "Eniola Aluko",
    "Ferenc Puskas",
];

/// Insert `count` demo registrants.
///
/// Emails are derived from the index. The seed path writes directly to
/// the table, bypassing the signup handler's uniqueness check, so
/// re-running the command duplicates earlier rows.
///
/// # Errors
///
/// Returns `CliError` if an insert fails or a generated email is invalid.
pub async fn registrants(count: u32) -> Result<(), CliError> {
    let pool = connect().await?;

    tracing::info!("Seeding {} demo registrants...", count);

    for i in 0..count {
        #[allow(clippy::indexing_slicing)] // modulo keeps the index in range
        let name = ROSTER[i as usize % ROSTER.len()];
        let email = Email::parse(&format!("fan{i}@example.com"))
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;
        let phone = format!("555-{:04}", i);

        sqlx::query(
            r"
            INSERT INTO registrant (fullname, email, phone)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(name)
        .bind(email.as_str())
        .bind(&phone)
        .execute(&pool)
        .await?;
    }

    tracing::info!("Seed complete!");
    Ok(())
}
