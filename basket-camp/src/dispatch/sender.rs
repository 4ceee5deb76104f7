//! Registration dispatcher trait abstraction
//!
//! This module defines the `RegistrationDispatcher` trait that every backend
//! implements.

use async_trait::async_trait;

use super::DispatchError;
use crate::registration::Registration;

/// Trait for delivering a validated registration
///
/// Implemented by the EmailJS client and the console backend.
///
/// # Examples
///
/// ```rust,no_run
/// use basket_camp::config::EmailJsSettings;
/// use basket_camp::dispatch::{EmailJsClient, RegistrationDispatcher};
/// use basket_camp::registration::RegistrationForm;
///
/// # async fn example(form: RegistrationForm) -> Result<(), Box<dyn std::error::Error>> {
/// let dispatcher = EmailJsClient::new(EmailJsSettings::default())?;
/// let registration = form.validate_submission()?;
///
/// dispatcher.dispatch(&registration).await?;
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationDispatcher: Send + Sync {
    /// Send one registration to the provider
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` if configuration is incomplete or the
    /// provider call fails
    async fn dispatch(&self, registration: &Registration) -> Result<(), DispatchError>;

    /// Whether this dispatcher has everything it needs to send
    fn is_ready(&self) -> bool {
        true
    }
}
