//! User entity.

use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted name, in characters, after trimming.
pub const NAME_MAX_CHARS: usize = 100;

/// Inclusive lower bound for `age`.
pub const AGE_MIN: i64 = 0;

/// Inclusive upper bound for `age`.
pub const AGE_MAX: i64 = 150;

/// User record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the store.
    pub id: UserId,

    /// Display name, already trimmed.
    pub name: String,

    /// Age in years.
    pub age: u8,

    /// Whether the user has admin rights.
    pub is_admin: bool,

    /// Creation timestamp. Never changes.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated user fields, as accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub age: u8,
    pub is_admin: bool,
}

impl UserDraft {
    /// Creates a draft from already validated values.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u8, is_admin: bool) -> Self {
        Self {
            name: name.into(),
            age,
            is_admin,
        }
    }
}

impl User {
    /// Creates a new user with the given ID. Both timestamps are set to now.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            age: draft.age,
            is_admin: draft.is_admin,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces all mutable fields and refreshes `updated_at`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn replace(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.age = draft.age;
        self.is_admin = draft.is_admin;
        self.updated_at = Utc::now().max(self.created_at);
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}
