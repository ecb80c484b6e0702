//! # hearth-listings: listings, uploads, and the public feed
//!
//! Three pieces, in the order a listing comes to life:
//!
//! 1. [`UploadCoordinator`] runs the two-phase image flow: hand out a
//!    signed upload slot, let the client push bytes directly to
//!    storage, then commit a validated listing row referencing the
//!    returned object ids. The phases are deliberately not atomic — an
//!    abandoned transfer leaves nothing behind.
//! 2. [`store::ListingStore`] persists the rows; [`MemoryListingStore`]
//!    is the reference adapter, including the title search index with
//!    `type` as its filter field.
//! 3. [`ListingQuery`] serves the feed and detail views, resolving each
//!    listing's object references to fetchable URLs (a stale reference
//!    degrades to `None` at its position instead of failing the query).

mod config;
mod coordinator;
mod index;
mod memory;
mod query;
pub mod store;

pub use config::MarketConfig;
pub use coordinator::UploadCoordinator;
pub use memory::MemoryListingStore;
pub use query::{ListingQuery, ListingView};
pub use store::ListingStore;
