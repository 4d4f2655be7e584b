//! Common test utilities and helpers
//!
//! Shared fixtures and fakes for the integration tests.

pub mod mock_services;
pub mod test_fixtures;
