//! User service trait definition.

use crate::dto::{UserPayload, UserResponse};
use async_trait::async_trait;
use roster_core::{Interface, RosterResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists all users in creation order.
    async fn list_users(&self) -> RosterResult<Vec<UserResponse>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse>;

    /// Validates the payload and creates a new user.
    async fn create_user(&self, payload: UserPayload) -> RosterResult<UserResponse>;

    /// Replaces a user's fields.
    ///
    /// A missing user is reported before the payload is validated.
    async fn update_user(&self, id: UserId, payload: UserPayload) -> RosterResult<UserResponse>;

    /// Deletes a user and returns the removed record.
    async fn delete_user(&self, id: UserId) -> RosterResult<UserResponse>;

    /// Removes all users and restarts ID allocation.
    async fn reset(&self) -> RosterResult<()>;
}
