//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{Interface, RosterResult, User, UserDraft, UserId};

/// User repository trait.
///
/// Implementations own the records and hand out clones.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Returns all users in insertion order.
    async fn find_all(&self) -> RosterResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Stores a new user under the next sequential ID.
    async fn insert(&self, draft: UserDraft) -> RosterResult<User>;

    /// Replaces the mutable fields of an existing user.
    ///
    /// Returns `None` if no user has this ID.
    async fn update(&self, id: UserId, draft: UserDraft) -> RosterResult<Option<User>>;

    /// Removes a user and returns the removed record.
    async fn delete(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Counts all users.
    async fn count(&self) -> RosterResult<u64>;

    /// Removes every user and restarts ID allocation.
    async fn reset(&self) -> RosterResult<()>;
}
