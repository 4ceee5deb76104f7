//! basket-camp: promotional site and registration form for a summer basketball camp
//!
//! The landing page is rendered server-side with Askama. The registration form
//! posts through HTMX; the server validates it, hands valid submissions to the
//! EmailJS REST API, and swaps back the form fragment with the outcome.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use basket_camp::{config::CampConfig, observability, server, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     observability::init()?;
//!
//!     let config = CampConfig::load()?;
//!     let state = AppState::from_config(config)?;
//!
//!     server::serve(state).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`registration`] - form input, ordered validation, the validated record
//! - [`controller`] - submission state machine (idle, validating, submitting, outcome)
//! - [`dispatch`] - EmailJS client and console backend behind one trait
//! - [`web`] - routes, handlers and templates

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod health;
pub mod observability;
pub mod registration;
pub mod server;
pub mod state;
pub mod web;

#[cfg(test)]
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits

    pub use crate::config::{CampConfig, DispatchBackend, EmailJsSettings};
    pub use crate::controller::{FormController, Notice, SubmissionPhase};
    pub use crate::dispatch::{
        ConsoleDispatcher, DispatchError, EmailJsClient, RegistrationDispatcher,
    };
    pub use crate::error::CampError;
    pub use crate::registration::{
        Position, Registration, RegistrationForm, TshirtSize, ValidationError,
    };
    pub use crate::state::AppState;
}
