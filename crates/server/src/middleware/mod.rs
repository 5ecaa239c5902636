//! HTTP middleware stack for the signup service.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions with in-memory store)

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
