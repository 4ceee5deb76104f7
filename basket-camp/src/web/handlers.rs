//! HTTP handlers for the landing page and the registration form

use askama::Template;
use axum::{extract::State, response::Html, Form};
use axum_htmx::HxRequest;

use super::views::{FormView, LandingPage, RegistrationFragment};
use crate::{
    controller::FormController, error::CampError, registration::RegistrationForm,
    state::AppState,
};

/// `GET /` - full landing page with a blank form
pub async fn index() -> Result<Html<String>, CampError> {
    Ok(Html(LandingPage::new(FormView::blank()).render()?))
}

/// `POST /register` - validate and dispatch one submission
///
/// HTMX requests get the registration fragment only; plain form posts get
/// the whole page so the form also works without JavaScript.
pub async fn register(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<RegistrationForm>,
) -> Result<Html<String>, CampError> {
    let mut controller = FormController::new(state.dispatcher());
    let phase = controller.submit(form).await;
    tracing::debug!(?phase, is_htmx, "Registration handled");

    let view = FormView::from_controller(&controller);
    let html = if is_htmx {
        RegistrationFragment { form: view }.render()?
    } else {
        LandingPage::new(view).render()?
    };

    Ok(Html(html))
}
