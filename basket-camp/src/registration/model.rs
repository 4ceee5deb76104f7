//! Registration form input and the validated submission

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Guardian email: something, `@`, something, `.`, something
pub(crate) static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Phone: at least seven digits, `+`, `-` or whitespace characters
pub(crate) static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+0-9\-\s]{7,}$").expect("phone pattern is valid"));

/// Playing position offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    /// Guard (preselected)
    #[default]
    Guard,
    /// Forward
    Forward,
    /// Center
    Center,
}

impl Position {
    /// All positions in display order
    pub const ALL: [Self; 3] = [Self::Guard, Self::Forward, Self::Center];

    /// Form value and template parameter for this position
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guard => "Guard",
            Self::Forward => "Forward",
            Self::Center => "Center",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// Camp t-shirt size, youth sizes first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TshirtSize {
    /// Youth small
    YS,
    /// Youth medium
    YM,
    /// Youth large (preselected)
    #[default]
    YL,
    /// Adult small
    S,
    /// Adult medium
    M,
    /// Adult large
    L,
    /// Adult extra large
    XL,
}

impl TshirtSize {
    /// All sizes in display order
    pub const ALL: [Self; 7] = [
        Self::YS,
        Self::YM,
        Self::YL,
        Self::S,
        Self::M,
        Self::L,
        Self::XL,
    ];

    /// Form value and template parameter for this size
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::YS => "YS",
            Self::YM => "YM",
            Self::YL => "YL",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
        }
    }
}

impl std::fmt::Display for TshirtSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TshirtSize {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// A select value outside the offered choices
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown choice: {0}")]
pub struct UnknownChoice(pub String);

/// Raw registration form as posted by the browser
///
/// Every field is text; missing fields deserialize to empty values. The
/// checkbox posts `consent=on` only when ticked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegistrationForm {
    /// Guardian full name
    #[validate(length(min = 1))]
    pub parent_name: String,
    /// Guardian email
    #[validate(regex(path = *EMAIL_PATTERN))]
    pub parent_email: String,
    /// Contact phone
    #[validate(regex(path = *PHONE_PATTERN))]
    pub parent_phone: String,
    /// Athlete full name
    #[validate(length(min = 1))]
    pub athlete_name: String,
    /// Athlete age as typed
    pub athlete_age: String,
    /// Selected position
    pub position: String,
    /// Selected t-shirt size
    pub tshirt_size: String,
    /// Comments or medical information
    pub notes: String,
    /// Privacy consent checkbox
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent: Option<String>,
}

impl Default for RegistrationForm {
    /// A blank form with the selects on their preselected values
    fn default() -> Self {
        Self {
            parent_name: String::new(),
            parent_email: String::new(),
            parent_phone: String::new(),
            athlete_name: String::new(),
            athlete_age: String::new(),
            position: Position::default().as_str().to_string(),
            tshirt_size: TshirtSize::default().as_str().to_string(),
            notes: String::new(),
            consent: None,
        }
    }
}

impl RegistrationForm {
    /// Copy of the form with every text field trimmed
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            parent_name: self.parent_name.trim().to_string(),
            parent_email: self.parent_email.trim().to_string(),
            parent_phone: self.parent_phone.trim().to_string(),
            athlete_name: self.athlete_name.trim().to_string(),
            athlete_age: self.athlete_age.trim().to_string(),
            position: self.position.trim().to_string(),
            tshirt_size: self.tshirt_size.trim().to_string(),
            notes: self.notes.trim().to_string(),
            consent: self.consent.clone(),
        }
    }

    /// Whether the consent checkbox was ticked
    #[must_use]
    pub fn consent_given(&self) -> bool {
        self.consent.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// A validated registration, ready for dispatch
///
/// Built only by [`RegistrationForm::validate_submission`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub(crate) parent_name: String,
    pub(crate) parent_email: String,
    pub(crate) parent_phone: String,
    pub(crate) athlete_name: String,
    pub(crate) athlete_age: String,
    pub(crate) position: Position,
    pub(crate) tshirt_size: TshirtSize,
    pub(crate) notes: Option<String>,
    pub(crate) consent: bool,
}

impl Registration {
    /// Guardian full name
    #[must_use]
    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }

    /// Guardian email
    #[must_use]
    pub fn parent_email(&self) -> &str {
        &self.parent_email
    }

    /// Contact phone
    #[must_use]
    pub fn parent_phone(&self) -> &str {
        &self.parent_phone
    }

    /// Athlete full name
    #[must_use]
    pub fn athlete_name(&self) -> &str {
        &self.athlete_name
    }

    /// Athlete age as entered
    #[must_use]
    pub fn athlete_age(&self) -> &str {
        &self.athlete_age
    }

    /// Playing position
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// T-shirt size
    #[must_use]
    pub const fn tshirt_size(&self) -> TshirtSize {
        self.tshirt_size
    }

    /// Free-text notes, if any were given
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Privacy consent
    #[must_use]
    pub const fn consent(&self) -> bool {
        self.consent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_preselects_choices() {
        let form = RegistrationForm::default();
        assert_eq!(form.position, "Guard");
        assert_eq!(form.tshirt_size, "YL");
        assert!(!form.consent_given());
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("Center".parse::<Position>(), Ok(Position::Center));
        assert_eq!("XL".parse::<TshirtSize>(), Ok(TshirtSize::XL));
        assert!("Point".parse::<Position>().is_err());
        assert!("xl".parse::<TshirtSize>().is_err());
    }

    #[test]
    fn test_consent_requires_non_empty_value() {
        let mut form = RegistrationForm {
            consent: Some("on".into()),
            ..RegistrationForm::default()
        };
        assert!(form.consent_given());

        form.consent = Some(String::new());
        assert!(!form.consent_given());
    }

    #[test]
    fn test_trimmed() {
        let form = RegistrationForm {
            parent_name: "  Maria  ".into(),
            notes: "\n asthma \t".into(),
            ..RegistrationForm::default()
        };
        let trimmed = form.trimmed();
        assert_eq!(trimmed.parent_name, "Maria");
        assert_eq!(trimmed.notes, "asthma");
    }

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_PATTERN.is_match("parent@example.gr"));
        assert!(!EMAIL_PATTERN.is_match("parent@example"));
        assert!(!EMAIL_PATTERN.is_match("parent.example.gr"));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE_PATTERN.is_match("+30 697 123 4567"));
        assert!(PHONE_PATTERN.is_match("2810-123456"));
        assert!(!PHONE_PATTERN.is_match("12345"));
        assert!(!PHONE_PATTERN.is_match("697 ABC 4567"));
    }
}
