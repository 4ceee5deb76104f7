//! Console backend for development
//!
//! Logs registrations instead of sending them, so the form can be exercised
//! without EmailJS credentials.

use async_trait::async_trait;
use tracing::info;

use crate::dispatch::{template_params, DispatchError, RegistrationDispatcher};
use crate::registration::Registration;

/// Console dispatch backend
///
/// # Examples
///
/// ```rust
/// use basket_camp::dispatch::{ConsoleDispatcher, RegistrationDispatcher};
///
/// let dispatcher = ConsoleDispatcher::new().with_target("camp@example.gr");
/// assert!(dispatcher.is_ready());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleDispatcher {
    target_email: Option<String>,
}

impl ConsoleDispatcher {
    /// Create a new console backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Include a routing address in the logged parameters
    #[must_use]
    pub fn with_target(mut self, target_email: impl Into<String>) -> Self {
        self.target_email = Some(target_email.into());
        self
    }
}

#[async_trait]
impl RegistrationDispatcher for ConsoleDispatcher {
    async fn dispatch(&self, registration: &Registration) -> Result<(), DispatchError> {
        let params = template_params(registration, self.target_email.as_deref());
        info!(params = ?params, "Console registration dispatched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::RegistrationForm;

    #[tokio::test]
    async fn test_console_dispatch_succeeds() {
        let registration = RegistrationForm {
            parent_name: "Eleni".into(),
            parent_email: "eleni@example.gr".into(),
            parent_phone: "6971234567".into(),
            athlete_name: "Nikos".into(),
            consent: Some("on".into()),
            ..RegistrationForm::default()
        }
        .validate_submission()
        .expect("form is valid");

        let dispatcher = ConsoleDispatcher::new();
        assert!(dispatcher.dispatch(&registration).await.is_ok());
    }
}
