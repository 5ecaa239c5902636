//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The store lives and
//! dies with the process: every admin is logged out by a restart. The
//! `SessionStore` trait keeps the store swappable if that ever needs to
//! change.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::ServerConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "matchday_session";

/// Create the session layer with an in-memory store.
///
/// # Arguments
///
/// * `config` - Server configuration (for the inactivity expiry)
#[must_use]
pub fn create_session_layer(config: &ServerConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(config.session_expiry_seconds),
        ))
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
