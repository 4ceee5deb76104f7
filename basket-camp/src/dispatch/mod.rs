//! Email dispatch: hands a validated registration to the email provider
//!
//! - [`EmailJsClient`] posts to the EmailJS REST API
//! - [`ConsoleDispatcher`] logs instead of sending (development)
//!
//! Each dispatch is exactly one outbound request; nothing is retried.

mod backend;
mod error;
mod params;
mod sender;

use std::sync::Arc;

use crate::config::{CampConfig, DispatchBackend};

pub use backend::{console::ConsoleDispatcher, emailjs::EmailJsClient};
pub use error::DispatchError;
pub use params::{template_params, TemplateParams};
pub use sender::RegistrationDispatcher;

#[cfg(test)]
pub use sender::MockRegistrationDispatcher;

/// Build the dispatcher selected by configuration
///
/// # Errors
///
/// Returns `DispatchError::Transport` if the HTTP client cannot be built
pub fn from_config(config: &CampConfig) -> Result<Arc<dyn RegistrationDispatcher>, DispatchError> {
    let dispatcher: Arc<dyn RegistrationDispatcher> = match config.dispatch.backend {
        DispatchBackend::EmailJs => Arc::new(EmailJsClient::new(config.emailjs.clone())?),
        DispatchBackend::Console => {
            let console = ConsoleDispatcher::new();
            match config.emailjs.target_email.as_deref() {
                Some(target) => Arc::new(console.with_target(target)),
                None => Arc::new(console),
            }
        }
    };
    Ok(dispatcher)
}
