//! Dispatch error types

use thiserror::Error;

/// Errors that can occur while handing a registration to the provider
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required provider value is absent or blank
    #[error("provider configuration missing: {0}")]
    MissingConfig(&'static str),

    /// The request never produced a response (connect, TLS, timeout)
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("provider rejected the request with {status}: {body}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, usually a short reason
        body: String,
    },
}

impl DispatchError {
    /// Whether the failure is a local configuration problem
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::MissingConfig(_))
    }
}
