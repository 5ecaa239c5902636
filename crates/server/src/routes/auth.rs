//! Authentication route handlers for the admin panel.
//!
//! Provides the login page, login action, and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;

use crate::db::AdminRepository;
use crate::error::{AppError, Result};
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// Render the login page.
///
/// GET /login
pub async fn login_page() -> LoginTemplate {
    LoginTemplate
}

/// Handle a login submission.
///
/// Matches an admin credential whose username AND password exactly equal
/// the input (one combined-filter query). On success the matched admin is
/// bound into the session and the caller lands on the admin view.
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    // Absent and blank both count as missing.
    let username = form.username.filter(|v| !v.trim().is_empty());
    let password = form.password.filter(|v| !v.is_empty());
    let (Some(username), Some(password)) = (username, password) else {
        return Err(AppError::Validation(
            "Username and password are required.".to_string(),
        ));
    };

    let admin = AdminRepository::new(state.pool())
        .find_by_credentials(&username, &password)
        .await?
        .ok_or(AppError::Authentication)?;

    let current = CurrentAdmin {
        id: admin.id,
        username: admin.username,
    };
    set_current_admin(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to bind session: {e}")))?;

    tracing::info!(username = %current.username, "Admin logged in");

    Ok(Redirect::to("/admin"))
}

/// Logout and clear the session.
///
/// POST /logout
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }

    // Also destroy the session record itself
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {e}");
    }

    Redirect::to("/login")
}
