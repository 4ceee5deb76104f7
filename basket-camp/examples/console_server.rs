//! Run the camp site with the console dispatch backend
//!
//! Registrations are logged instead of emailed, so the form can be tried
//! without EmailJS credentials.
//!
//! Run with: `cargo run --example console_server`

use basket_camp::{
    config::{CampConfig, DispatchBackend},
    observability, server,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init()?;

    let mut config = CampConfig::load()?;
    config.dispatch.backend = DispatchBackend::Console;

    tracing::info!(
        port = config.server.port,
        "Starting camp site with console dispatcher"
    );

    let state = AppState::from_config(config)?;
    server::serve(state).await?;

    Ok(())
}
