//! Registration submission: raw form input, validation, and the validated record
//!
//! A [`RegistrationForm`] arrives from the browser, is trimmed and checked by
//! [`RegistrationForm::validate_submission`], and becomes an immutable
//! [`Registration`] that lives only until the dispatch call resolves.
//!
//! ```rust
//! use basket_camp::registration::{RegistrationForm, ValidationError};
//!
//! let form = RegistrationForm {
//!     parent_name: "Eleni".into(),
//!     athlete_name: "Nikos".into(),
//!     parent_email: "not-an-email".into(),
//!     ..RegistrationForm::default()
//! };
//!
//! assert_eq!(form.validate_submission(), Err(ValidationError::InvalidEmail));
//! ```

mod model;
mod validation;

pub use model::{Position, Registration, RegistrationForm, TshirtSize, UnknownChoice};
pub use validation::ValidationError;
