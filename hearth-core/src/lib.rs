//! # hearth-core: shared model for the Hearth listing marketplace
//!
//! `hearth-core` holds the types every other Hearth crate speaks:
//! typed ids, the `User` and `Listing` records, the error taxonomy,
//! and the small validation helper used on write paths.
//!
//! The crate is deliberately collaborator-free: no storage, no identity,
//! no async. Those boundaries live in `hearth-storage` and
//! `hearth-directory`.

pub mod errors;
pub mod ids;
pub mod model;
pub mod rules;

pub use errors::{Error, Result};
pub use ids::{ExternalId, ListingId, ObjectRef, UserId};
pub use model::{Listing, ListingDraft, ListingType, Role, User};
pub use rules::Rules;
