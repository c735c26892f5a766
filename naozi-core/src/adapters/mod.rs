//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Blocking reqwest HTTP transport for the Apps Script backend
//! - Local filesystem for session persistence
//! - Recording transport double for tests

pub mod http;
pub mod session;

#[cfg(test)]
pub mod mock;

pub use http::HttpTransport;
pub use session::SessionStore;
