//! Test server utilities using axum-test
//!
//! Wraps `axum_test::TestServer` around the real application router with a
//! [`StubDispatcher`] in place of the provider.

use http::{HeaderName, HeaderValue};
use std::sync::Arc;

use super::StubDispatcher;
use crate::{config::CampConfig, state::AppState, web};

/// Test server over the full router
pub struct TestServer {
    inner: axum_test::TestServer,
    dispatcher: Arc<StubDispatcher>,
}

impl TestServer {
    /// Start a server backed by the given stub
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be started
    pub fn new(dispatcher: StubDispatcher) -> anyhow::Result<Self> {
        let dispatcher = Arc::new(dispatcher);
        let state = AppState::new(CampConfig::default(), dispatcher.clone());
        let inner = axum_test::TestServer::new(web::router(state))?;
        Ok(Self { inner, dispatcher })
    }

    /// Make a GET request to the server
    pub fn get(&self, path: &str) -> axum_test::TestRequest {
        self.inner.get(path)
    }

    /// Make a POST request to the server
    pub fn post(&self, path: &str) -> axum_test::TestRequest {
        self.inner.post(path)
    }

    /// Make an HTMX POST request (`HX-Request: true`)
    pub fn hx_post(&self, path: &str) -> axum_test::TestRequest {
        self.inner.post(path).add_header(
            HeaderName::from_static("hx-request"),
            HeaderValue::from_static("true"),
        )
    }

    /// The stub receiving dispatched registrations
    #[must_use]
    pub fn dispatcher(&self) -> &StubDispatcher {
        &self.dispatcher
    }
}
