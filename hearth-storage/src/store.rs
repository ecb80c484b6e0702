use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hearth_core::{ObjectRef, Result};

/// Token identifying a signed upload slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotToken(pub String);

impl SlotToken {
    /// Generate a new random slot token.
    pub fn new() -> Self {
        Self(format!("slot_{}", Uuid::new_v4().simple()))
    }

    pub fn from_string(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SlotToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SlotToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short-lived, single-use authorization for one direct byte upload.
///
/// The slot is not reusable: a failed or abandoned transfer means a
/// fresh slot from [`ObjectStore::issue_upload_slot`], never a retry
/// against the same URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSlot {
    pub token: SlotToken,
    /// The signed URL the client uploads against.
    pub url: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl UploadSlot {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// The storage collaborator contract.
///
/// Failures propagate unchanged to the caller as
/// [`Error::Backend`](hearth_core::Error::Backend), with one deliberate
/// exception: `resolve` reports a stale reference as `Ok(None)` instead
/// of failing, so one dead image never sinks a whole query.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Issue a signed upload slot. No object exists yet.
    async fn issue_upload_slot(&self) -> Result<UploadSlot>;

    /// Accept the direct byte transfer for a slot.
    ///
    /// This models the out-of-band PUT/POST against the signed URL.
    /// Expired or already-used slots are
    /// [`Error::Transfer`](hearth_core::Error::Transfer); on success the
    /// returned [`ObjectRef`] is stable and resolvable.
    async fn accept_upload(
        &self,
        token: &SlotToken,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> Result<ObjectRef>;

    /// Resolve an object reference to a fetchable URL, or `None` when
    /// the object no longer exists.
    async fn resolve(&self, object: &ObjectRef) -> Result<Option<String>>;

    /// Delete a stored object. Deleting an unknown reference is not an
    /// error.
    async fn delete(&self, object: &ObjectRef) -> Result<()>;
}
