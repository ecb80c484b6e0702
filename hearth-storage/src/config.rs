/// Configuration for the storage boundary.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// How long an upload slot stays valid, in seconds.
    pub slot_ttl_secs: i64,
    /// Maximum accepted object size in bytes.
    pub max_object_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            slot_ttl_secs: 15 * 60,
            max_object_bytes: 25 * 1024 * 1024,
        }
    }
}

impl StorageConfig {
    pub fn with_slot_ttl_secs(mut self, secs: i64) -> Self {
        self.slot_ttl_secs = secs;
        self
    }

    pub fn with_max_object_bytes(mut self, bytes: u64) -> Self {
        self.max_object_bytes = bytes;
        self
    }
}
