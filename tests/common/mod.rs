//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A mock backend wired to a client context
//! - JSON fixtures in the backend's wire format
//! - Custom assertion macros

pub mod assertions;
pub mod fixtures;
pub mod mock_server;

// Re-export commonly used utilities
pub use fixtures::*;
pub use mock_server::*;
