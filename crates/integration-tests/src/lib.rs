//! Integration tests for Matchday.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p matchday-cli -- migrate
//!
//! # Provision the test admin credential
//! cargo run -p matchday-cli -- admin create -u gatekeeper -p test-password
//!
//! # Start the server
//! cargo run -p matchday-server
//!
//! # Run integration tests (ignored by default)
//! cargo test -p matchday-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `MATCHDAY_BASE_URL` - Server under test (default: <http://localhost:3000>)
//! - `MATCHDAY_TEST_ADMIN_USERNAME` / `MATCHDAY_TEST_ADMIN_PASSWORD` -
//!   Credential provisioned for the login tests
