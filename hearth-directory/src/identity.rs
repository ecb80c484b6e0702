use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use hearth_core::{ExternalId, Result};

/// Profile fields the identity collaborator exposes for the signed-in
/// user. The external id is the collaborator's identifier, not ours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalProfile {
    pub external_id: ExternalId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ExternalProfile {
    pub fn new<E: Into<String>>(external_id: ExternalId, email: E) -> Self {
        Self {
            external_id,
            email: email.into(),
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_name<F: Into<String>, L: Into<String>>(mut self, first: F, last: L) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }
}

/// The identity collaborator contract: who is acting right now.
///
/// Session issuing and validation happen upstream; `None` means no
/// signed-in user.
#[async_trait]
pub trait Identity: Send + Sync {
    async fn current_profile(&self) -> Result<Option<ExternalProfile>>;
}

/// Fixed-profile identity for tests and local development.
pub struct StaticIdentity {
    profile: Option<ExternalProfile>,
}

impl StaticIdentity {
    pub fn signed_in(profile: ExternalProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    pub fn anonymous() -> Self {
        Self { profile: None }
    }
}

#[async_trait]
impl Identity for StaticIdentity {
    async fn current_profile(&self) -> Result<Option<ExternalProfile>> {
        Ok(self.profile.clone())
    }
}
