//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{ErrorResponse, RosterError};
use serde::Serialize;
use tracing::error;

/// Body returned for unmatched routes and methods.
pub const ROUTE_NOT_FOUND: &str = "Not Found";

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub RosterError);

impl<E> From<E> for AppError
where
    E: Into<RosterError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// Handler for routes and methods the API does not serve.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(ROUTE_NOT_FOUND)))
}
