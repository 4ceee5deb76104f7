//! Registration form controller
//!
//! Owns the submission state machine:
//!
//! ```text
//! Idle -> Validating -> Idle                (rule failed, values kept)
//!                    -> Submitting -> Succeeded (form cleared)
//!                                  -> Failed    (values kept for retry)
//! ```
//!
//! `submit` never returns while still `Submitting`.

use std::sync::Arc;
use tracing::{error, info};

use crate::dispatch::RegistrationDispatcher;
use crate::registration::RegistrationForm;

/// Shown after the provider accepted the registration
pub const SUCCESS_MESSAGE: &str = "Η αίτηση στάλθηκε! Θα επικοινωνήσουμε άμεσα.";

/// Shown when dispatch failed for any reason
pub const DISPATCH_FAILED_MESSAGE: &str = "Κάτι πήγε στραβά με την αποστολή. Δοκίμασε ξανά.";

/// Where the controller is in a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Waiting for input
    #[default]
    Idle,
    /// Checking field rules
    Validating,
    /// Dispatch call in flight
    Submitting,
    /// Provider accepted the registration
    Succeeded,
    /// Dispatch failed
    Failed,
}

/// Transient message for the guardian
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Registration sent
    Success(String),
    /// Validation or dispatch problem
    Error(String),
}

impl Notice {
    /// Message text
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }

    /// Whether this notice reports a problem
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Drives one registration form through validation and dispatch
pub struct FormController {
    dispatcher: Arc<dyn RegistrationDispatcher>,
    phase: SubmissionPhase,
    values: RegistrationForm,
    notice: Option<Notice>,
}

impl FormController {
    /// Create an idle controller with a blank form
    #[must_use]
    pub fn new(dispatcher: Arc<dyn RegistrationDispatcher>) -> Self {
        Self {
            dispatcher,
            phase: SubmissionPhase::Idle,
            values: RegistrationForm::default(),
            notice: None,
        }
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Values the form should display
    #[must_use]
    pub const fn values(&self) -> &RegistrationForm {
        &self.values
    }

    /// Message from the last submission, if any
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Validate and dispatch a submission
    ///
    /// A failing rule aborts before any network call and keeps the entered
    /// values. On dispatch success the form is cleared; on failure the values
    /// stay so the guardian can retry.
    pub async fn submit(&mut self, form: RegistrationForm) -> SubmissionPhase {
        self.phase = SubmissionPhase::Validating;
        self.values = form;

        let registration = match self.values.validate_submission() {
            Ok(registration) => registration,
            Err(rule) => {
                info!(rule = rule.code(), "Registration rejected by validation");
                self.notice = Some(Notice::Error(rule.to_string()));
                self.phase = SubmissionPhase::Idle;
                return self.phase;
            }
        };

        self.phase = SubmissionPhase::Submitting;
        let outcome = self.dispatcher.dispatch(&registration).await;
        drop(registration);

        match outcome {
            Ok(()) => {
                self.values = RegistrationForm::default();
                self.notice = Some(Notice::Success(SUCCESS_MESSAGE.to_string()));
                self.phase = SubmissionPhase::Succeeded;
            }
            Err(err) => {
                error!(error = %err, config = err.is_config(), "Registration dispatch failed");
                self.notice = Some(Notice::Error(DISPATCH_FAILED_MESSAGE.to_string()));
                self.phase = SubmissionPhase::Failed;
            }
        }

        self.phase
    }
}
