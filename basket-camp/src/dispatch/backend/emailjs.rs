//! EmailJS REST backend
//!
//! Sends one `POST` to the EmailJS send endpoint per registration. The
//! provider answers `200 OK` with a plain-text body on success and a short
//! text reason otherwise.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::{non_empty, EmailJsSettings};
use crate::dispatch::{template_params, DispatchError, RegistrationDispatcher, TemplateParams};
use crate::registration::Registration;

/// Request body accepted by the EmailJS send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Required identifiers, checked right before sending
struct Credentials<'a> {
    service_id: &'a str,
    template_id: &'a str,
    public_key: &'a str,
}

/// EmailJS dispatch client
///
/// Holds the provider settings as configured; missing identifiers are
/// reported by [`RegistrationDispatcher::dispatch`] before any network I/O.
///
/// # Examples
///
/// ```rust,no_run
/// use basket_camp::config::EmailJsSettings;
/// use basket_camp::dispatch::EmailJsClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EmailJsClient::new(EmailJsSettings {
///     service_id: Some("service_camp".into()),
///     template_id: Some("template_registration".into()),
///     public_key: Some("pk_123".into()),
///     ..EmailJsSettings::default()
/// })?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    settings: EmailJsSettings,
}

impl EmailJsClient {
    /// Create a client with the configured request timeout
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Transport` if the HTTP client cannot be built
    pub fn new(settings: EmailJsSettings) -> Result<Self, DispatchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;

        Ok(Self { http, settings })
    }

    /// Provider settings this client was built with
    #[must_use]
    pub const fn settings(&self) -> &EmailJsSettings {
        &self.settings
    }

    fn credentials(&self) -> Result<Credentials<'_>, DispatchError> {
        Ok(Credentials {
            service_id: required(self.settings.service_id.as_deref(), "service_id")?,
            template_id: required(self.settings.template_id.as_deref(), "template_id")?,
            public_key: required(self.settings.public_key.as_deref(), "public_key")?,
        })
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, DispatchError> {
    non_empty(value).ok_or(DispatchError::MissingConfig(name))
}

#[async_trait]
impl RegistrationDispatcher for EmailJsClient {
    async fn dispatch(&self, registration: &Registration) -> Result<(), DispatchError> {
        let credentials = self.credentials()?;
        let target_email = non_empty(self.settings.target_email.as_deref());

        let request = SendRequest {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            user_id: credentials.public_key,
            template_params: template_params(registration, target_email),
            access_token: non_empty(self.settings.access_token.as_deref()),
        };

        debug!(
            service_id = credentials.service_id,
            template_id = credentials.template_id,
            "Sending registration to EmailJS"
        );

        let response = self
            .http
            .post(&self.settings.api_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), body = %body, "EmailJS rejected registration");
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            position = %registration.position(),
            tshirt_size = %registration.tshirt_size(),
            "Registration dispatched"
        );
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.settings.is_complete()
    }
}
