//! JSON body extractor that ignores `Content-Type`.
//!
//! The body is read as raw bytes and must hold a JSON object. Every parse
//! failure becomes a 400 with the standard error body.

use crate::responses::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use roster_core::{RosterError, RosterResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Message for a request with no body.
pub const BODY_REQUIRED: &str = "Request body is required";

/// Message for a body that is valid JSON but not an object.
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

/// Extracts a JSON object body and deserializes it into `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T> std::ops::Deref for JsonBody<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for JSON body extraction.
#[derive(Debug)]
pub enum JsonBodyRejection {
    /// The body could not be read (for example, it exceeds the size limit).
    Body(BytesRejection),
    /// The body was read but is not an acceptable JSON object.
    Invalid(AppError),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Body(rejection) => rejection.into_response(),
            Self::Invalid(error) => error.into_response(),
        }
    }
}

/// Parses raw body bytes into `T`, requiring a JSON object at the top level.
pub fn parse_json_object<T: DeserializeOwned>(bytes: &[u8]) -> RosterResult<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(RosterError::bad_request(BODY_REQUIRED));
    }

    let value: Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(RosterError::bad_request(BODY_NOT_OBJECT));
    }

    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonBodyRejection::Body)?;

        parse_json_object(&bytes)
            .map(JsonBody)
            .map_err(|e| JsonBodyRejection::Invalid(AppError(e)))
    }
}
