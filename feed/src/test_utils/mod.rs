//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The aggregation API is mocked at the `MentionSource` port rather than over
//! HTTP: pages are scripted per page number and every request is recorded.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
