//! User ID path extractor.
//!
//! Percent-decoding failures and non-numeric segments both become a 400
//! with the standard error body instead of axum's plain-text rejection.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use roster_core::{RosterError, UserId};
use tracing::debug;

/// Message for a path segment that cannot be decoded.
pub const INVALID_USER_ID: &str = "Invalid user ID";

/// Extracts the `:id` segment as a [`UserId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

/// Parses a decoded path segment into a user ID.
pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    Ok(UserId::parse(raw)?)
}

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!("Rejected user ID segment: {}", rejection.body_text());
                AppError(RosterError::bad_request(INVALID_USER_ID))
            })?;

        parse_user_id(&raw).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("12").unwrap(), UserId(12));
        assert_eq!(parse_user_id("0").unwrap(), UserId(0));
    }

    #[test]
    fn test_parse_user_id_rejects_garbage() {
        for raw in ["abc", "-1", "1.5", ""] {
            match parse_user_id(raw) {
                Err(AppError(RosterError::BadRequest(message))) => {
                    assert_eq!(message, format!("Invalid user ID: {raw}"));
                }
                other => panic!("Expected bad request for {raw:?}, got {other:?}"),
            }
        }
    }
}
