//! User service implementation.

use crate::dto::{UserPayload, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{RosterError, RosterResult, UserId};
use roster_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

const USER: &str = "User";

/// User service backed by a [`UserRepository`].
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> RosterResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found(USER, id))?;

        Ok(UserResponse::from(user))
    }

    async fn create_user(&self, payload: UserPayload) -> RosterResult<UserResponse> {
        debug!("Creating user");

        let draft = payload.into_draft()?;
        let user = self.user_repository.insert(draft).await?;

        info!("User created: {}", user.id);
        Ok(UserResponse::from(user))
    }

    async fn update_user(&self, id: UserId, payload: UserPayload) -> RosterResult<UserResponse> {
        debug!("Updating user: {}", id);

        if self.user_repository.find_by_id(id).await?.is_none() {
            return Err(RosterError::not_found(USER, id));
        }

        let draft = payload.into_draft()?;
        let user = self
            .user_repository
            .update(id, draft)
            .await?
            .ok_or_else(|| RosterError::not_found(USER, id))?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(user))
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Deleting user: {}", id);

        let user = self
            .user_repository
            .delete(id)
            .await?
            .ok_or_else(|| RosterError::not_found(USER, id))?;

        info!("User deleted: {}", id);
        Ok(UserResponse::from(user))
    }

    async fn reset(&self) -> RosterResult<()> {
        debug!("Resetting user store");
        self.user_repository.reset().await
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
