//! # hearth-storage: the object storage boundary
//!
//! Binary object storage is an external collaborator in Hearth. This
//! crate defines the contract the rest of the system consumes:
//!
//! - [`ObjectStore::issue_upload_slot`] hands out a short-lived,
//!   single-use signed URL. Nothing durable exists at this point.
//! - The client pushes bytes directly against that URL. The memory
//!   adapter models this hop as [`ObjectStore::accept_upload`], which
//!   returns a stable [`ObjectRef`](hearth_core::ObjectRef) on success.
//! - [`ObjectStore::resolve`] turns an object reference into a fetchable
//!   URL on demand, or `None` when the reference has gone stale.
//!
//! [`MemoryObjectStore`] is the reference adapter used by tests and
//! local development; a hosted backend implements the same trait.

mod config;
mod memory;
pub mod store;

pub use config::StorageConfig;
pub use memory::MemoryObjectStore;
pub use store::{ObjectStore, SlotToken, UploadSlot};
