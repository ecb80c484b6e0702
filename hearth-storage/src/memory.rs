use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use hearth_core::{Error, ObjectRef, Result};

use crate::config::StorageConfig;
use crate::store::{ObjectStore, SlotToken, UploadSlot};

#[derive(Debug)]
struct SlotState {
    slot: UploadSlot,
    used: bool,
}

#[derive(Debug)]
struct StoredObject {
    content_type: Option<String>,
    size_bytes: u64,
}

/// In-memory reference implementation of [`ObjectStore`].
///
/// Slots and objects live in RwLock maps; "signed URLs" are synthetic
/// `memory://` URLs. Good for tests and local development, not for
/// durability.
pub struct MemoryObjectStore {
    config: StorageConfig,
    slots: RwLock<HashMap<String, SlotState>>,
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl MemoryObjectStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            slots: RwLock::new(HashMap::new()),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored objects, for tests.
    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }

    fn object_url(object: &ObjectRef) -> String {
        format!("memory://objects/{object}")
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new(StorageConfig::default())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn issue_upload_slot(&self) -> Result<UploadSlot> {
        let token = SlotToken::new();
        let issued_at = Utc::now();
        let slot = UploadSlot {
            url: format!("memory://uploads/{token}"),
            token: token.clone(),
            issued_at,
            expires_at: issued_at + Duration::seconds(self.config.slot_ttl_secs),
        };

        self.slots.write().await.insert(
            token.as_str().to_string(),
            SlotState {
                slot: slot.clone(),
                used: false,
            },
        );

        tracing::debug!(token = %token, "issued upload slot");
        Ok(slot)
    }

    async fn accept_upload(
        &self,
        token: &SlotToken,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> Result<ObjectRef> {
        if bytes.len() as u64 > self.config.max_object_bytes {
            return Err(Error::invalid(format!(
                "Object size {} exceeds maximum {}",
                bytes.len(),
                self.config.max_object_bytes
            )));
        }

        let mut slots = self.slots.write().await;
        let state = slots
            .get_mut(token.as_str())
            .ok_or_else(|| Error::transfer(format!("Unknown upload slot: {token}")))?;

        if state.used {
            return Err(Error::transfer(format!(
                "Upload slot already used: {token}"
            )));
        }
        if state.slot.is_expired_at(Utc::now()) {
            return Err(Error::transfer(format!("Upload slot expired: {token}")));
        }
        state.used = true;
        drop(slots);

        let object = ObjectRef::new();
        self.objects.write().await.insert(
            object.as_str().to_string(),
            StoredObject {
                content_type: content_type.map(|ct| ct.to_string()),
                size_bytes: bytes.len() as u64,
            },
        );

        tracing::debug!(object = %object, size = bytes.len(), "accepted upload");
        Ok(object)
    }

    async fn resolve(&self, object: &ObjectRef) -> Result<Option<String>> {
        let objects = self.objects.read().await;
        Ok(objects
            .get(object.as_str())
            .map(|_| Self::object_url(object)))
    }

    async fn delete(&self, object: &ObjectRef) -> Result<()> {
        self.objects.write().await.remove(object.as_str());
        Ok(())
    }
}
