//! Configuration validation module.
//!
//! Checks every configuration value up front and reports all problems at
//! once instead of failing on the first one.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Body size limit must be positive.
    ZeroBodyLimit,
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
    /// CORS method is not an HTTP method name.
    InvalidCorsMethod { value: String },
    /// CORS enabled but no origin configured.
    MissingCorsOrigin,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{}' must be positive, got {}", name, value)
            }
            Self::ZeroBodyLimit => write!(f, "max_body_size must be greater than zero"),
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{}' (valid: pretty, json)", value)
            }
            Self::InvalidCorsMethod { value } => {
                write!(f, "Invalid CORS method: '{}'", value)
            }
            Self::MissingCorsOrigin => {
                write!(f, "At least one CORS origin is required when CORS is enabled")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Valid log formats.
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Methods accepted in the CORS allow list.
    const VALID_METHODS: &'static [&'static str] =
        &["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE", "OPTIONS"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_cors(&config.cors, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &crate::ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        // 0 would bind a random port
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "port".to_string(),
                value: config.port,
            });
        }

        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "request_timeout_secs".to_string(),
                value: 0,
            });
        }

        if config.max_body_size == 0 {
            errors.push(ConfigValidationError::ZeroBodyLimit);
        }
    }

    fn validate_cors(config: &crate::CorsConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.enabled {
            return;
        }

        if config.allowed_origins.is_empty() {
            errors.push(ConfigValidationError::MissingCorsOrigin);
        }

        for method in &config.allowed_methods {
            if !Self::VALID_METHODS.contains(&method.to_uppercase().as_str()) {
                errors.push(ConfigValidationError::InvalidCorsMethod {
                    value: method.clone(),
                });
            }
        }
    }

    fn validate_observability(
        config: &crate::ObservabilityConfig,
        errors: &mut Vec<ConfigValidationError>,
    ) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }

        let format = config.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }
    }
}
