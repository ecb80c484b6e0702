//! # hearth-directory: external identities to internal users
//!
//! Sessions belong to the identity collaborator; this crate never
//! validates one. What it owns is the mapping from the collaborator's
//! external id to Hearth's internal [`User`](hearth_core::User) record:
//!
//! - [`UserDirectory::ensure_user`] creates the record on first
//!   onboarding and is idempotent per external id afterwards.
//! - [`UserDirectory::get_user_by_external_id`] resolves the acting
//!   user before any listing mutation.
//!
//! The [`Identity`] trait is the read-side contract the collaborator
//! fulfils (current external id plus profile fields).

mod directory;
pub mod identity;
mod memory;
pub mod store;

pub use directory::UserDirectory;
pub use identity::{ExternalProfile, Identity, StaticIdentity};
pub use memory::MemoryUserStore;
pub use store::UserStore;
