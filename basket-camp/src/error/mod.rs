//! Application error type and its HTTP response

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::dispatch::DispatchError;

/// Site-level error type
#[derive(Debug, Error)]
pub enum CampError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Dispatcher could not be constructed
    #[error("Dispatch setup error: {0}")]
    Dispatch(#[from] DispatchError),

    /// I/O error (binding, serving)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for CampError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_response_hides_details() {
        let response = CampError::Config("secret".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display() {
        let err = CampError::from(DispatchError::MissingConfig("template_id"));
        assert_eq!(
            err.to_string(),
            "Dispatch setup error: provider configuration missing: template_id"
        );
    }
}
