//! Root route handler.

/// Plain-text liveness banner.
///
/// GET /
pub async fn root() -> &'static str {
    "Matchday signup server is running!"
}
