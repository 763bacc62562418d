//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ROSTER";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `ROSTER_` prefix
    ///
    /// The environment name comes from `ROSTER_ENVIRONMENT` and defaults
    /// to `development`.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RosterError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("ROSTER_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn with_environment(
        config_dir: impl Into<String>,
        environment: impl Into<String>,
    ) -> Result<Self, RosterError> {
        let config_dir = config_dir.into();
        let environment = environment.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RosterError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration is kept if the new one fails to load.
    pub async fn reload(&self) -> Result<(), RosterError> {
        let new_config = Self::load_config(&self.config_dir, &self.environment)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str, environment: &str) -> Result<AppConfig, RosterError> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (ROSTER_ prefix)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .with_list_parse_key("cors.allowed_methods")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_roster_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_roster_error)?;
        app_config.app.environment = environment.to_string();

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration, reporting every problem found.
    fn validate_config(config: &AppConfig) -> Result<(), RosterError> {
        ConfigValidator::validate(config).map_err(|errors| {
            RosterError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })
    }

    /// Gets a specific configuration value by key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn loader(dir: &TempDir, environment: &str) -> Result<ConfigLoader, RosterError> {
        ConfigLoader::with_environment(dir.path().to_string_lossy().to_string(), environment)
    }

    #[tokio::test]
    async fn test_empty_directory_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = loader(&dir, "development").unwrap().get().await;

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.app.environment, "development");
    }

    #[tokio::test]
    async fn test_environment_file_overrides_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 4000\nhost = \"127.0.0.1\"\n");
        write(&dir, "staging.toml", "[server]\nport = 5000\n");

        let config = loader(&dir, "staging").unwrap().get().await;
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.app.environment, "staging");
    }

    #[tokio::test]
    async fn test_local_file_overrides_environment() {
        let dir = TempDir::new().unwrap();
        write(&dir, "development.toml", "[observability]\nlog_level = \"warn\"\n");
        write(&dir, "local.toml", "[observability]\nlog_level = \"trace\"\n");

        let config = loader(&dir, "development").unwrap().get().await;
        assert_eq!(config.observability.log_level, "trace");
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 0\n");

        let err = loader(&dir, "development").err().unwrap();
        assert!(matches!(err, RosterError::Configuration(ref msg) if msg.contains("Invalid port")));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 4000\n");
        let loader = loader(&dir, "development").unwrap();

        write(&dir, "default.toml", "[server]\nport = 4001\n");
        loader.reload().await.unwrap();

        assert_eq!(loader.get().await.server.port, 4001);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_config() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 4000\n");
        let loader = loader(&dir, "development").unwrap();

        write(&dir, "default.toml", "[server]\nport = 0\n");
        assert!(loader.reload().await.is_err());

        assert_eq!(loader.get().await.server.port, 4000);
    }

    #[tokio::test]
    async fn test_get_value_by_key_path() {
        let dir = TempDir::new().unwrap();
        let loader = loader(&dir, "development").unwrap();

        assert_eq!(loader.get_value::<u16>("server.port").await, Some(3000));
        assert_eq!(
            loader.get_value::<String>("observability.log_format").await,
            Some("pretty".to_string())
        );
        assert_eq!(loader.get_value::<u16>("server.missing").await, None);
    }
}
