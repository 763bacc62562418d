//! # Roster Server
//!
//! Main entry point for the Roster user service.

use roster_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use roster_core::RosterResult;
use roster_server::app::Application;
use roster_server::startup::{init_logging, print_banner, print_startup_info};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match load_config().await {
        Ok(config) => config,
        Err(e) => {
            let _ = init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("Failed to initialize logging: {e}");
    }

    print_banner();
    info!("Starting Roster Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn load_config() -> RosterResult<AppConfig> {
    let config_loader = ConfigLoader::from_default_location()?;
    Ok(config_loader.get().await)
}

async fn run(config: AppConfig) -> RosterResult<()> {
    print_startup_info(&config);

    let app = Application::new(config);
    let listener = app.bind().await?;
    app.serve(listener, shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
