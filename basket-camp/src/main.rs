//! basket-camp server binary

use anyhow::Result;
use basket_camp::{
    config::{CampConfig, DispatchBackend},
    observability, server,
    state::AppState,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basket-camp")]
#[command(version)]
#[command(about = "Summer basketball camp site and registration form", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the standard locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server (default)
    Serve {
        /// Interface to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on, overriding configuration
        #[arg(long)]
        port: Option<u16>,
    },
    /// Report the dispatch backend and any missing provider settings
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => CampConfig::load_from(path)?,
        None => CampConfig::load()?,
    };

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            observability::init()?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = AppState::from_config(config)?;
            server::serve(state).await?;
        }
        Commands::CheckConfig => check_config(&config)?,
    }

    Ok(())
}

fn check_config(config: &CampConfig) -> Result<()> {
    println!("dispatch backend: {}", config.dispatch.backend.as_str());
    if config.dispatch.backend == DispatchBackend::Console {
        println!("console backend needs no provider settings");
        return Ok(());
    }

    println!("endpoint: {}", config.emailjs.api_url);
    let missing = config.emailjs.missing();
    if missing.is_empty() {
        println!("emailjs settings complete");
        Ok(())
    } else {
        anyhow::bail!("missing emailjs settings: {}", missing.join(", "))
    }
}
