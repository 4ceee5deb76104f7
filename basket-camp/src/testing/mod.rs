//! Testing utilities for the camp site
//!
//! - [`TestServer`] - `axum-test` server over the full application router
//! - [`StubDispatcher`] - records registrations and succeeds or fails on demand

pub mod dispatcher;
pub mod server;

pub use dispatcher::StubDispatcher;
pub use server::TestServer;
