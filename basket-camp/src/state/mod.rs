//! Application state shared by every handler

use std::sync::Arc;

use crate::{
    config::CampConfig,
    dispatch::{self, RegistrationDispatcher},
    error::CampError,
};

/// Application state
///
/// Cheap to clone: configuration and dispatcher are behind `Arc`.
///
/// # Example
///
/// ```rust
/// use basket_camp::{config::CampConfig, state::AppState};
///
/// # fn example() -> anyhow::Result<()> {
/// let state = AppState::from_config(CampConfig::default())?;
///
/// let app: axum::Router = axum::Router::new()
///     .route("/", axum::routing::get(|| async { "Hello!" }))
///     .with_state(state);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AppState {
    config: Arc<CampConfig>,
    dispatcher: Arc<dyn RegistrationDispatcher>,
}

impl AppState {
    /// Build state with the dispatcher selected by configuration
    ///
    /// # Errors
    ///
    /// Returns `CampError::Dispatch` if the dispatcher cannot be constructed
    pub fn from_config(config: CampConfig) -> Result<Self, CampError> {
        let dispatcher = dispatch::from_config(&config)?;
        Ok(Self::new(config, dispatcher))
    }

    /// Build state around an explicit dispatcher
    #[must_use]
    pub fn new(config: CampConfig, dispatcher: Arc<dyn RegistrationDispatcher>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Get configuration reference
    #[must_use]
    pub fn config(&self) -> &CampConfig {
        &self.config
    }

    /// Shared dispatcher handle
    #[must_use]
    pub fn dispatcher(&self) -> Arc<dyn RegistrationDispatcher> {
        Arc::clone(&self.dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DispatchBackend;

    #[test]
    fn test_from_default_config() {
        let state = AppState::from_config(CampConfig::default()).expect("state builds");
        assert_eq!(state.config().server.port, 3000);
        assert!(!state.dispatcher().is_ready());
    }

    #[test]
    fn test_console_backend_is_ready() {
        let mut config = CampConfig::default();
        config.dispatch.backend = DispatchBackend::Console;

        let state = AppState::from_config(config).expect("state builds");
        assert!(state.dispatcher().is_ready());
    }

    #[test]
    fn test_clone_state() {
        let state = AppState::from_config(CampConfig::default()).expect("state builds");
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert!(Arc::ptr_eq(&state.dispatcher, &cloned.dispatcher));
    }
}
