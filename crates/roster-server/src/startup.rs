//! Server startup utilities.

use roster_config::{AppConfig, ObservabilityConfig};
use tracing::info;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Builds the log filter.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to
/// everything.
pub fn log_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()))
}

/// Installs the global tracing subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(log_filter(config));

    if config.is_json() {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("Users API:   http://{}/users", addr);
    info!("Health:      http://{}/health", addr);
    info!("{}", separator);
}
