//! Admin panel view handler.

use askama::Template;
use askama_web::WebTemplate;

use crate::middleware::RequireAdmin;

/// Admin panel template.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    /// Logged-in admin's username, shown in the header.
    pub username: String,
}

/// Render the admin panel.
///
/// The `RequireAdmin` extractor redirects to /login when no admin is
/// bound to the session.
///
/// GET /admin
pub async fn admin_view(RequireAdmin(admin): RequireAdmin) -> AdminTemplate {
    AdminTemplate {
        username: admin.username,
    }
}
