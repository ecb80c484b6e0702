use std::sync::Arc;

use hearth_core::{ExternalId, Result, Role, User, UserId};

use crate::identity::ExternalProfile;
use crate::store::UserStore;

/// The user directory: maps external identities to internal user
/// records with a role.
pub struct UserDirectory {
    users: Arc<dyn UserStore>,
}

impl UserDirectory {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Complete onboarding for an external identity.
    ///
    /// Idempotent per external id: if a record already exists its
    /// internal id is returned unchanged — role and names are never
    /// overwritten on repeat calls.
    pub async fn ensure_user(&self, profile: ExternalProfile, role: Role) -> Result<UserId> {
        if let Some(existing) = self
            .users
            .get_by_external_id(&profile.external_id)
            .await?
        {
            tracing::debug!(
                external_id = %profile.external_id,
                user_id = %existing.id,
                "user already onboarded"
            );
            return Ok(existing.id);
        }

        let user = User {
            id: UserId::new(),
            external_id: profile.external_id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            role,
        };
        let user = self.users.create(user).await?;
        tracing::info!(user_id = %user.id, role = user.role.as_str(), "user onboarded");
        Ok(user.id)
    }

    /// Resolve the acting user from the collaborator's external id.
    ///
    /// `None` when the identity has never completed onboarding.
    pub async fn get_user_by_external_id(&self, external_id: &ExternalId) -> Result<Option<User>> {
        self.users.get_by_external_id(external_id).await
    }

    /// Fetch a user by internal id.
    pub async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        self.users.get(id).await
    }
}
