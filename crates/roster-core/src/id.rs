//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// A path segment that is not a valid user ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid user ID: {0}")]
pub struct InvalidUserId(pub String);

/// A strongly-typed wrapper for user IDs.
///
/// IDs are allocated sequentially by the store, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// The first ID handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a user ID from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a user ID from a path segment.
    ///
    /// Only plain unsigned decimal integers are accepted: no sign, no
    /// whitespace, no fractional part.
    pub fn parse(s: &str) -> Result<Self, InvalidUserId> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidUserId(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| InvalidUserId(s.to_string()))
    }

    /// Returns the ID that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::parse("1").unwrap(), UserId(1));
        assert_eq!(UserId::parse("999").unwrap(), UserId(999));
        assert_eq!("42".parse::<UserId>().unwrap(), UserId(42));
    }

    #[test]
    fn test_user_id_parse_rejects_non_integers() {
        assert!(UserId::parse("abc").is_err());
        assert!(UserId::parse("").is_err());
        assert!(UserId::parse("-1").is_err());
        assert!(UserId::parse("1.5").is_err());
        assert!(UserId::parse("1a").is_err());
        assert!(UserId::parse("+1").is_err());
        assert!(UserId::parse(" 1").is_err());
        assert!(UserId::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_user_id_parse_zero() {
        assert_eq!(UserId::parse("0").unwrap(), UserId(0));
    }

    #[test]
    fn test_invalid_user_id_message() {
        let err = UserId::parse("abc").unwrap_err();
        assert_eq!(err, InvalidUserId("abc".to_string()));
        assert_eq!(err.to_string(), "Invalid user ID: abc");
    }

    #[test]
    fn test_user_id_sequence() {
        assert_eq!(UserId::default(), UserId::FIRST);
        assert_eq!(UserId::FIRST.next(), UserId(2));
        assert!(UserId(1) < UserId(2));
    }

    #[test]
    fn test_user_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&UserId(7)).unwrap(), "7");
        assert_eq!(UserId(7).to_string(), "7");
        assert_eq!(u64::from(UserId(7)), 7);
    }
}
