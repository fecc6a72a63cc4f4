//! Integration tests for SecondXE Admin.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the admin server against a test backend project
//! cargo run -p secondxe-admin
//!
//! # Run integration tests
//! cargo test -p secondxe-integration-tests -- --ignored
//! ```
//!
//! The tests talk to a running admin server over HTTP and are ignored by
//! default because they need live backend credentials
//! (`ADMIN_BASE_URL`, `TEST_ADMIN_EMAIL`, `TEST_ADMIN_PASSWORD`).
