//! HTTP server lifecycle

use tokio::net::TcpListener;

use crate::{error::CampError, state::AppState, web};

/// Bind, serve until a shutdown signal arrives, then drain
///
/// # Errors
///
/// Returns `CampError::Io` if the address cannot be bound or serving fails
pub async fn serve(state: AppState) -> Result<(), CampError> {
    let addr = state.config().server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(
        addr = %addr,
        backend = state.config().dispatch.backend.as_str(),
        dispatch_ready = state.dispatcher().is_ready(),
        "Server listening"
    );

    axum::serve(listener, web::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
