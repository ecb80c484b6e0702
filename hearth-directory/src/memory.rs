use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use hearth_core::{ExternalId, Result, User, UserId};

use crate::store::UserStore;

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    // external id -> internal id, the by_external index
    by_external: HashMap<String, String>,
}

/// In-memory reference implementation of [`UserStore`].
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of user rows, for tests.
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: User) -> Result<User> {
        let mut inner = self.inner.write().await;

        // Uniqueness per external id: a concurrent or repeated create
        // returns the existing row untouched.
        if let Some(existing_id) = inner.by_external.get(user.external_id.as_str()) {
            let existing = inner.users.get(existing_id).cloned();
            if let Some(existing) = existing {
                return Ok(existing);
            }
        }

        inner.by_external.insert(
            user.external_id.as_str().to_string(),
            user.id.as_str().to_string(),
        );
        inner
            .users
            .insert(user.id.as_str().to_string(), user.clone());
        Ok(user)
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.inner.read().await.users.get(id.as_str()).cloned())
    }

    async fn get_by_external_id(&self, external_id: &ExternalId) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_external
            .get(external_id.as_str())
            .and_then(|id| inner.users.get(id))
            .cloned())
    }
}
