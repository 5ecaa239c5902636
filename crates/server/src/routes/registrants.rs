//! Registrant management handlers (the /users JSON API).
//!
//! Backs the admin panel's table: list/search/paginate, partial update,
//! and delete. Mutations broadcast a push event to connected admin views.
//! A missing update/delete target answers 200 with "No user found" - the
//! modified/deleted-count signal, not an HTTP error.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use matchday_core::Email;

use crate::db::{ListParams, RegistrantRepository, SortOrder};
use crate::error::{AppError, Result};
use crate::models::{Registrant, RegistrantPatch};
use crate::notify::Event;
use crate::state::AppState;

/// Default page size for the registrant listing.
const DEFAULT_LIMIT: i64 = 10;

/// Query parameters for the registrant listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring matched against fullname, email, or phone.
    pub search: Option<String>,
    /// "asc" sorts ascending by creation time; anything else descending.
    pub sort: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<i64>,
    /// Records per page (default 10).
    pub limit: Option<i64>,
}

/// Listing response: one page of records plus the total match count for
/// the pagination UI.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub users: Vec<Registrant>,
    pub total: i64,
}

/// Update request body. Only supplied fields change; email identifies the
/// target and is itself immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub email: Option<String>,
    pub fullname: Option<String>,
    pub phone: Option<String>,
}

/// Delete request body.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub email: Option<String>,
}

/// List/search/paginate registrants.
///
/// GET /users
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    let params = ListParams {
        search: query.search,
        sort: SortOrder::from_param(query.sort.as_deref()),
        page: positive_or(query.page, 1),
        limit: positive_or(query.limit, DEFAULT_LIMIT),
    };

    let page = RegistrantRepository::new(state.pool()).list(&params).await?;

    Ok(Json(ListResponse {
        users: page.registrants,
        total: page.total,
    }))
}

/// Partially update a registrant by email.
///
/// PUT /users
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<&'static str> {
    let email = required_email(req.email)?;

    // Blank strings are treated as "field not supplied".
    let fullname = req.fullname.filter(|v| !v.trim().is_empty());
    let phone = req.phone.filter(|v| !v.trim().is_empty());

    let modified = RegistrantRepository::new(state.pool())
        .update(&email, fullname.as_deref(), phone.as_deref())
        .await?;

    if modified {
        tracing::info!(email = %email, "Registrant updated");
        state.notifier().publish(Event::UpdateUser(RegistrantPatch {
            email,
            fullname,
            phone,
        }));
        Ok("User updated")
    } else {
        Ok("No user found")
    }
}

/// Delete a registrant by email.
///
/// DELETE /users
pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Result<&'static str> {
    let email = required_email(req.email)?;

    let deleted = RegistrantRepository::new(state.pool())
        .delete_by_email(&email)
        .await?;

    if deleted {
        tracing::info!(email = %email, "Registrant deleted");
        state.notifier().publish(Event::DeleteUser(email));
        Ok("User deleted")
    } else {
        Ok("No user found")
    }
}

/// Extract and validate the required email field.
fn required_email(value: Option<String>) -> Result<Email> {
    let raw = value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Email is required".to_string()))?;
    Email::parse(&raw).map_err(|e| AppError::Validation(e.to_string()))
}

/// Positive value or the default; zero and negatives fall back.
const fn positive_or(value: Option<i64>, default: i64) -> i64 {
    match value {
        Some(v) if v > 0 => v,
        _ => default,
    }
}
