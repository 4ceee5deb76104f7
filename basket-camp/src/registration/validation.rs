//! Ordered validation of a registration form
//!
//! Field rules are declared on [`RegistrationForm`] with `validator`
//! attributes. The first failing rule in [`ValidationError::ORDER`] wins, so
//! the guardian only ever sees one message at a time.

use thiserror::Error;
use validator::Validate;

use super::model::{Position, Registration, RegistrationForm, TshirtSize};

/// A registration rule that rejected the input
///
/// The display text is the user-facing message shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Guardian or athlete name is empty
    #[error("Συμπλήρωσε ονόματα κηδεμόνα & αθλητή/τριας")]
    MissingNames,

    /// Guardian email lacks an `@` or a domain
    #[error("Έγκυρο email κηδεμόνα απαιτείται")]
    InvalidEmail,

    /// Phone contains letters or is too short
    #[error("Τηλέφωνο μη έγκυρο")]
    InvalidPhone,

    /// Consent checkbox not ticked
    #[error("Χρειάζεται συγκατάθεση για επεξεργασία δεδομένων")]
    MissingConsent,

    /// Position or t-shirt size outside the offered choices
    #[error("Μη έγκυρη επιλογή θέσης ή μεγέθους")]
    InvalidSelection,
}

impl ValidationError {
    /// Field-level rules in the order they are reported
    const ORDER: [Self; 3] = [Self::MissingNames, Self::InvalidEmail, Self::InvalidPhone];

    /// Form fields whose `validator` errors map to this rule
    #[must_use]
    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::MissingNames => &["parent_name", "athlete_name"],
            Self::InvalidEmail => &["parent_email"],
            Self::InvalidPhone => &["parent_phone"],
            Self::MissingConsent => &["consent"],
            Self::InvalidSelection => &["position", "tshirt_size"],
        }
    }

    /// Short machine-readable rule name, safe to log
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingNames => "missing_names",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPhone => "invalid_phone",
            Self::MissingConsent => "missing_consent",
            Self::InvalidSelection => "invalid_selection",
        }
    }

    fn first_of(errors: &validator::ValidationErrors) -> Option<Self> {
        let failed = errors.field_errors();
        Self::ORDER
            .into_iter()
            .find(|rule| rule.fields().iter().any(|field| failed.contains_key(*field)))
    }
}

impl RegistrationForm {
    /// Trim and validate the form, stopping at the first failing rule
    ///
    /// Rules apply in this order: names, email, phone, consent, then the
    /// select values. Empty selects fall back to their preselected choice.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the input violates.
    pub fn validate_submission(&self) -> Result<Registration, ValidationError> {
        let form = self.trimmed();

        if let Err(errors) = form.validate() {
            // Every field error belongs to a rule in ORDER.
            return Err(ValidationError::first_of(&errors).unwrap_or(ValidationError::MissingNames));
        }

        if !form.consent_given() {
            return Err(ValidationError::MissingConsent);
        }

        let position = choice_or_default::<Position>(&form.position)?;
        let tshirt_size = choice_or_default::<TshirtSize>(&form.tshirt_size)?;

        let RegistrationForm {
            parent_name,
            parent_email,
            parent_phone,
            athlete_name,
            athlete_age,
            notes,
            ..
        } = form;

        Ok(Registration {
            parent_name,
            parent_email,
            parent_phone,
            athlete_name,
            athlete_age,
            position,
            tshirt_size,
            notes: (!notes.is_empty()).then_some(notes),
            consent: true,
        })
    }
}

fn choice_or_default<T>(value: &str) -> Result<T, ValidationError>
where
    T: std::str::FromStr + Default,
{
    if value.is_empty() {
        return Ok(T::default());
    }
    value
        .parse()
        .map_err(|_| ValidationError::InvalidSelection)
}
