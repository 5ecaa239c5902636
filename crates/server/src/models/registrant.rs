//! Registrant domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use matchday_core::{Email, RegistrantId};

/// A person who submitted the signup form (domain type).
///
/// Serializes to the admin-facing wire shape
/// `{fullname, email, phone, createdAt}`; the internal row ID stays
/// server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrant {
    /// Internal row ID.
    #[serde(skip_serializing)]
    pub id: RegistrantId,
    /// Registrant's full name.
    pub fullname: String,
    /// Registrant's email address (unique key).
    pub email: Email,
    /// Registrant's phone number.
    pub phone: String,
    /// When the signup was received (server-assigned).
    pub created_at: DateTime<Utc>,
}

/// A validated signup waiting to be inserted.
#[derive(Debug, Clone)]
pub struct NewRegistrant {
    pub fullname: String,
    pub email: Email,
    pub phone: String,
}

/// The changed fields of an updated registrant.
///
/// This is the payload of the `updateUser` push event: the identifying
/// email plus only the fields the update actually supplied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrantPatch {
    /// Email identifying the updated registrant.
    pub email: Email,
    /// New full name, if it was part of the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    /// New phone number, if it was part of the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
