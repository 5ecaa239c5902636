//! Signup route handlers.
//!
//! The public side of the service: the signup form, the submission
//! handler, and the confirmation page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use matchday_core::Email;

use crate::db::RegistrantRepository;
use crate::error::{AppError, Result};
use crate::notify::Event;
use crate::state::AppState;

/// Signup form data.
///
/// Fields are optional so that a missing field surfaces as our 400
/// ValidationError rather than a form-rejection.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "signup.html")]
pub struct SignupTemplate;

/// Confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "invitation.html")]
pub struct InvitationTemplate;

/// Render the signup form.
///
/// GET /signup
pub async fn signup_page() -> SignupTemplate {
    SignupTemplate
}

/// Render the post-signup confirmation page.
///
/// GET /invitation
pub async fn invitation() -> InvitationTemplate {
    InvitationTemplate
}

/// Handle a signup submission.
///
/// All three fields are required; the email must not already be
/// registered. On success: one insert with a server-assigned creation
/// timestamp, one best-effort `newUser` broadcast, and a redirect to the
/// confirmation page.
///
/// POST /signup
#[instrument(skip(state, form))]
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Redirect> {
    let fullname = required_field(form.fullname)?;
    let phone = required_field(form.phone)?;
    let email = Email::parse(&required_field(form.email)?)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let repo = RegistrantRepository::new(state.pool());

    // Pre-insert existence check; not atomic with the insert below, so
    // concurrent signups with the same email can both pass it.
    if repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let registrant = repo.insert(&fullname, &email, &phone).await?;
    tracing::info!(email = %registrant.email, "New registrant");

    state.notifier().publish(Event::NewUser(registrant));

    Ok(Redirect::to("/invitation"))
}

/// Extract a required form field, treating absent and blank as missing.
fn required_field(value: Option<String>) -> Result<String> {
    match value.map(|v| v.trim().to_owned()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation("All fields are required.".to_string())),
    }
}
