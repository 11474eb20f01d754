//! Shared test support for the four-hundred workspace.
//!
//! Provides idempotent tracing setup for unit and integration tests and the
//! proptest configuration read from the environment.

pub mod logging;
pub mod proptest_config;
