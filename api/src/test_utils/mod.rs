//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory repositories behave like a real store, so service and
//! handler tests can assert on counts and reloaded records.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
