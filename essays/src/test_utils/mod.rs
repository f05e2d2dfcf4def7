//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks record what the feed did to them (requests sent, markup written,
//! elements observed) so tests can assert on behavior without a browser or a
//! live GraphQL endpoint.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
