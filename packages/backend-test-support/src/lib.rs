//! Shared helpers for the backend's integration test binaries.
//!
//! Kept free of backend types so every test crate can depend on it.

pub mod logging;
pub mod problem_details;
