//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Roster.
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("{resource_type} not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// One or more field validation rules failed
    #[error("{}", join_messages(.0))]
    Validation(Vec<FieldError>),

    // ============ Request Errors ============
    /// Malformed request (unparseable path parameter or body)
    #[error("{0}")]
    BadRequest(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::BadRequest(_) => 400,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error from collected field errors.
    #[must_use]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the field errors carried by a validation error.
    #[must_use]
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<crate::InvalidUserId> for RosterError {
    fn from(err: crate::InvalidUserId) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(format!("Invalid JSON: {err}"))
    }
}

/// Serializable error body for API responses.
///
/// `error` is the short reason phrase clients match on; `message` carries
/// the detail when there is any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error title
    pub error: String,
    /// Human-readable detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as it appears in the request body
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates an error body with only a title.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            details: None,
        }
    }

    /// Creates a new error response from a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        match error {
            RosterError::NotFound { .. } => Self::new(error.to_string()),
            RosterError::Validation(errors) => Self::new("Bad Request")
                .with_message(error.to_string())
                .with_details(errors.clone()),
            RosterError::BadRequest(message) => Self::new("Bad Request").with_message(message.clone()),
            RosterError::Configuration(_) | RosterError::Internal(_) | RosterError::Other(_) => {
                Self::new("Internal Server Error").with_message(error.to_string())
            }
        }
    }

    /// Sets the detail message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&RosterError> for ErrorResponse {
    fn from(error: &RosterError) -> Self {
        Self::from_error(error)
    }
}
