//! HTTP route handlers for the signup service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /            - Plain-text liveness banner
//! GET    /health      - Health check (wired in main)
//!
//! # Signup (public)
//! GET    /signup      - Signup form
//! POST   /signup      - Submit a signup
//! GET    /invitation  - Post-signup confirmation
//!
//! # Auth
//! GET    /login       - Login page
//! POST   /login       - Login action
//! POST   /logout      - Logout action
//!
//! # Admin panel
//! GET    /admin       - Admin view (session-gated; redirects to /login)
//! GET    /users       - List/search/paginate registrants (JSON)
//! PUT    /users       - Partial update by email (JSON)
//! DELETE /users       - Delete by email (JSON)
//! GET    /ws          - WebSocket push channel for live admin updates
//! ```

pub mod admin;
pub mod auth;
pub mod home;
pub mod registrants;
pub mod signup;
pub mod ws;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the signup service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::root))
        // Public signup flow
        .route("/signup", get(signup::signup_page).post(signup::signup))
        .route("/invitation", get(signup::invitation))
        // Auth
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        // Admin panel
        .route("/admin", get(admin::admin_view))
        .route(
            "/users",
            get(registrants::list)
                .put(registrants::update)
                .delete(registrants::remove),
        )
        .route("/ws", get(ws::ws_handler))
}
