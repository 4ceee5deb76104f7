//! Askama templates and the view model they render

use askama::Template;
use chrono::Datelike;

use crate::controller::{FormController, Notice};
use crate::registration::{Position, RegistrationForm, TshirtSize};

/// Contact address printed in the footer
pub const CONTACT_EMAIL: &str = "camp@asanagennisi.gr";

/// One `<option>` of a select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    /// Option value and label
    pub value: &'static str,
    /// Whether the option is selected
    pub selected: bool,
}

/// Notice banner above the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    /// Message text
    pub message: String,
    /// Error styling instead of success styling
    pub is_error: bool,
}

impl From<&Notice> for NoticeView {
    fn from(notice: &Notice) -> Self {
        Self {
            message: notice.message().to_string(),
            is_error: notice.is_error(),
        }
    }
}

/// Everything the registration form fragment needs
#[derive(Debug, Clone)]
pub struct FormView {
    /// Values to prefill
    pub values: RegistrationForm,
    /// Whether the consent box is ticked
    pub consent: bool,
    /// Position options
    pub positions: Vec<ChoiceView>,
    /// T-shirt size options
    pub tshirt_sizes: Vec<ChoiceView>,
    /// Outcome of the last submission
    pub notice: Option<NoticeView>,
}

impl FormView {
    /// Blank form with default selections
    #[must_use]
    pub fn blank() -> Self {
        Self::build(RegistrationForm::default(), None)
    }

    /// View of the controller after a submission
    #[must_use]
    pub fn from_controller(controller: &FormController) -> Self {
        Self::build(
            controller.values().clone(),
            controller.notice().map(NoticeView::from),
        )
    }

    fn build(values: RegistrationForm, notice: Option<NoticeView>) -> Self {
        let positions = choices(Position::ALL.map(|p| p.as_str()), &values.position);
        let tshirt_sizes = choices(TshirtSize::ALL.map(|s| s.as_str()), &values.tshirt_size);

        Self {
            consent: values.consent_given(),
            values,
            positions,
            tshirt_sizes,
            notice,
        }
    }
}

fn choices<const N: usize>(all: [&'static str; N], current: &str) -> Vec<ChoiceView> {
    all.into_iter()
        .map(|value| ChoiceView {
            value,
            selected: value == current.trim(),
        })
        .collect()
}

/// Full landing page
#[derive(Template)]
#[template(path = "index.html")]
pub struct LandingPage {
    /// Registration form state
    pub form: FormView,
    /// Footer year
    pub year: i32,
    /// Footer contact address
    pub contact_email: &'static str,
}

impl LandingPage {
    /// Landing page around the given form
    #[must_use]
    pub fn new(form: FormView) -> Self {
        Self {
            form,
            year: chrono::Local::now().year(),
            contact_email: CONTACT_EMAIL,
        }
    }
}

/// Registration section only, swapped in by HTMX
#[derive(Template)]
#[template(path = "partials/registration_form.html")]
pub struct RegistrationFragment {
    /// Registration form state
    pub form: FormView,
}
