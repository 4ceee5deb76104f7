//! Flat template parameters sent to the provider

use std::collections::BTreeMap;

use crate::registration::Registration;

/// Template variables keyed by name
pub type TemplateParams = BTreeMap<&'static str, String>;

/// Map a registration onto the provider template's variables
///
/// Absent notes become `-`, consent becomes `Yes`/`No`, and `to_email`
/// carries the optional routing address (empty when unset).
#[must_use]
pub fn template_params(registration: &Registration, target_email: Option<&str>) -> TemplateParams {
    BTreeMap::from([
        ("parent_name", registration.parent_name().to_string()),
        ("parent_email", registration.parent_email().to_string()),
        ("parent_phone", registration.parent_phone().to_string()),
        ("athlete_name", registration.athlete_name().to_string()),
        ("athlete_age", registration.athlete_age().to_string()),
        ("position", registration.position().to_string()),
        ("tshirt_size", registration.tshirt_size().to_string()),
        ("notes", registration.notes().unwrap_or("-").to_string()),
        (
            "consent",
            if registration.consent() { "Yes" } else { "No" }.to_string(),
        ),
        ("to_email", target_email.unwrap_or_default().to_string()),
    ])
}
