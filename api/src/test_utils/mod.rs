//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The HTTP tests in `integration_tests` run against the SQLite adapter on an
//! in-memory database instead, since `AppState` is built on the concrete
//! repository.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
