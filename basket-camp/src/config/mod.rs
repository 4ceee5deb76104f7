//! Configuration management for the camp site
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. `CAMP_` environment variables (highest priority, `__` for nesting)
//! 2. Provider variables (`EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
//!    `EMAILJS_PUBLIC_KEY`, `EMAILJS_ACCESS_TOKEN`, `REGISTRATION_TARGET_EMAIL`)
//! 3. `./config.toml` (or an explicit file)
//! 4. `~/.config/basket-camp/config.toml` (user config, XDG)
//! 5. `/etc/basket-camp/config.toml` (system config)
//! 6. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [dispatch]
//! backend = "emailjs"
//!
//! [emailjs]
//! service_id = "service_xxx"
//! template_id = "template_xxx"
//! public_key = "pk_xxx"
//! target_email = "camp@asanagennisi.gr"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CampError;

/// Directory name used for system and user configuration
pub const SERVICE_NAME: &str = "basket-camp";

/// Default EmailJS REST endpoint
pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Plain provider variables accepted without the `CAMP_` prefix
const PROVIDER_VARS: [&str; 5] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
    "EMAILJS_ACCESS_TOKEN",
    "REGISTRATION_TARGET_EMAIL",
];

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Maximum accepted request body size in bytes
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            body_limit_bytes: 16 * 1024,
        }
    }
}

impl ServerSettings {
    /// `host:port` string suitable for `TcpListener::bind`
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which dispatcher delivers registrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchBackend {
    /// Send through the EmailJS REST API
    #[default]
    EmailJs,
    /// Log registrations instead of sending them (development)
    Console,
}

impl DispatchBackend {
    /// Configuration value for this backend
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmailJs => "emailjs",
            Self::Console => "console",
        }
    }
}

/// Dispatch configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    /// Active backend
    pub backend: DispatchBackend,
}

/// EmailJS provider configuration
///
/// The three identifiers are optional here; their absence is reported at
/// dispatch time, so the site still serves pages with an incomplete setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsSettings {
    /// REST endpoint receiving send requests
    pub api_url: String,

    /// EmailJS service identifier
    #[serde(deserialize_with = "provider_id")]
    pub service_id: Option<String>,

    /// EmailJS template identifier
    #[serde(deserialize_with = "provider_id")]
    pub template_id: Option<String>,

    /// EmailJS public key (sent as `user_id`)
    #[serde(deserialize_with = "provider_id")]
    pub public_key: Option<String>,

    /// Private access token, required when the account enforces it
    #[serde(deserialize_with = "provider_id")]
    pub access_token: Option<String>,

    /// Optional routing address exposed to the template as `to_email`
    pub target_email: Option<String>,

    /// Outbound request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for EmailJsSettings {
    fn default() -> Self {
        Self {
            api_url: EMAILJS_API_URL.to_string(),
            service_id: None,
            template_id: None,
            public_key: None,
            access_token: None,
            target_email: None,
            timeout_ms: 10_000,
        }
    }
}

impl EmailJsSettings {
    /// Names of required values that are absent or blank
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| non_empty(value.as_deref()).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// Whether every required value is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Environment values that look numeric arrive as numbers; keep them as text
fn provider_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Text(text) => text,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    }))
}

/// Treat blank strings like absent values
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CampConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Dispatch backend selection
    #[serde(default)]
    pub dispatch: DispatchSettings,

    /// EmailJS provider settings
    #[serde(default)]
    pub emailjs: EmailJsSettings,
}

impl CampConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns `CampError::Config` if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but contains invalid TOML
    /// - Values fail type conversion
    pub fn load() -> Result<Self, CampError> {
        let mut figment = Self::base()?;

        let system_config = PathBuf::from("/etc").join(SERVICE_NAME).join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Self::extract(figment)
    }

    /// Load configuration from a specific file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns `CampError::Config` if the file contains invalid TOML or
    /// values fail type conversion.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CampError> {
        let figment = Self::base()?.merge(Toml::file(path.as_ref()));
        Self::extract(figment)
    }

    /// Get the recommended XDG config path
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join(SERVICE_NAME).join("config.toml"),
        )
    }

    fn base() -> Result<Figment, CampError> {
        let defaults =
            toml::to_string(&Self::default()).map_err(|e| CampError::Config(e.to_string()))?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }

    fn extract(figment: Figment) -> Result<Self, CampError> {
        Self::with_env(figment)
            .extract()
            .map_err(|e| CampError::Config(e.to_string()))
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(provider_env())
            .merge(Env::prefixed("CAMP_").split("__").lowercase(true))
    }
}

/// Provider variables mapped onto the `emailjs` section
fn provider_env() -> Env {
    Env::raw().only(&PROVIDER_VARS).map(|key| {
        let key = key.as_str().to_ascii_lowercase();
        key.strip_prefix("emailjs_").map_or_else(
            || "emailjs.target_email".into(),
            |field| format!("emailjs.{field}").into(),
        )
    })
}
