//! In-memory user repository.

use crate::traits::UserRepository;
use async_trait::async_trait;
use parking_lot::Mutex;
use roster_core::{RosterResult, User, UserDraft, UserId};
use shaku::Component;
use std::collections::BTreeMap;
use tracing::debug;

/// Records and the ID counter, guarded together.
///
/// IDs only ever increase, so ordering by ID is insertion order.
#[derive(Debug)]
pub struct UserTable {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: UserId::FIRST,
        }
    }
}

impl UserTable {
    fn allocate_id(&mut self) -> UserId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

/// Process-local user repository.
///
/// Every operation takes the table lock once, so concurrent inserts never
/// share an ID and readers never see a half-applied update.
#[derive(Component, Debug, Default)]
#[shaku(interface = UserRepository)]
pub struct InMemoryUserRepository {
    #[shaku(default)]
    table: Mutex<UserTable>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> RosterResult<Vec<User>> {
        let table = self.table.lock();
        debug!("Repository: find_all ({} users)", table.users.len());
        Ok(table.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        Ok(self.table.lock().users.get(&id).cloned())
    }

    async fn insert(&self, draft: UserDraft) -> RosterResult<User> {
        let mut table = self.table.lock();
        let id = table.allocate_id();
        let user = User::new(id, draft);
        table.users.insert(id, user.clone());
        debug!("Repository: inserted user {}", id);
        Ok(user)
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> RosterResult<Option<User>> {
        debug!("Repository: update {}", id);
        let mut table = self.table.lock();
        Ok(table.users.get_mut(&id).map(|user| {
            user.replace(draft);
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Repository: delete {}", id);
        Ok(self.table.lock().users.remove(&id))
    }

    async fn count(&self) -> RosterResult<u64> {
        Ok(self.table.lock().users.len() as u64)
    }

    async fn reset(&self) -> RosterResult<()> {
        debug!("Repository: reset");
        *self.table.lock() = UserTable::default();
        Ok(())
    }
}
