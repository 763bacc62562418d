//! User-related DTOs.

use chrono::{DateTime, Utc};
use roster_core::{validate_user_fields, RosterResult, User, UserDraft, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message returned alongside a deleted user.
pub const USER_DELETED: &str = "User deleted";

/// Body of a create or update request.
///
/// Fields stay as raw JSON so that wrong types surface as validation errors.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub age: Option<Value>,

    #[serde(default, rename = "isAdmin")]
    pub is_admin: Option<Value>,
}

impl UserPayload {
    /// Runs every field rule and returns the validated draft.
    pub fn into_draft(self) -> RosterResult<UserDraft> {
        validate_user_fields(self.name.as_ref(), self.age.as_ref(), self.is_admin.as_ref())
    }
}

/// User record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub age: u8,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response body for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub user: UserResponse,
}

impl From<UserResponse> for DeleteUserResponse {
    fn from(user: UserResponse) -> Self {
        Self {
            message: USER_DELETED.to_string(),
            user,
        }
    }
}
