use async_trait::async_trait;

use hearth_core::{ExternalId, Result, User, UserId};

/// Persistence contract for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user record.
    ///
    /// Stores must uphold the one-record-per-external-id invariant: if
    /// a record with the same external id already exists, the existing
    /// record is returned and nothing is written.
    async fn create(&self, user: User) -> Result<User>;

    /// Fetch a user by internal id.
    async fn get(&self, id: &UserId) -> Result<Option<User>>;

    /// Fetch a user by the identity collaborator's external id.
    async fn get_by_external_id(&self, external_id: &ExternalId) -> Result<Option<User>>;
}
