//! Integration tests
//!
//! Exercise the client library against a mock backend.

mod api_test;
mod config_test;
mod http_test;
mod session_test;
