//! Routes, handlers and templates for the camp site
//!
//! | Route            | Purpose                                  |
//! |------------------|------------------------------------------|
//! | `GET /`          | Landing page                             |
//! | `POST /register` | Registration submission (HTMX or plain)  |
//! | `GET /health`    | Liveness and dispatch readiness          |

mod handlers;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use axum_htmx::AutoVaryLayer;
use tower_http::{
    compression::CompressionLayer, limit::RequestBodyLimitLayer, trace::TraceLayer,
};

use crate::{health, state::AppState};

pub use handlers::{index, register};

/// Build the application router
#[must_use]
pub fn router(state: AppState) -> Router {
    let body_limit = state.config().server.body_limit_bytes;

    Router::new()
        .route("/", get(index))
        .route("/register", post(register))
        .route("/health", get(health::health_check))
        .layer(AutoVaryLayer)
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
