use async_trait::async_trait;

use hearth_core::{Listing, ListingId, ListingType, Result, UserId};

/// Persistence contract for listing rows.
///
/// `search_titles` is the one operation with index semantics: the
/// optional type restriction is the index's filter field and must be
/// applied inside the store, not by collecting everything and filtering
/// afterwards.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Insert a listing row. Rows are immutable once written.
    async fn insert(&self, listing: Listing) -> Result<Listing>;

    /// Fetch one listing by id.
    async fn get(&self, id: &ListingId) -> Result<Option<Listing>>;

    /// Every listing. Order is not part of the contract.
    async fn find_all(&self) -> Result<Vec<Listing>>;

    /// Listings whose type equals the given literal.
    async fn find_by_type(&self, kind: ListingType) -> Result<Vec<Listing>>;

    /// Listings owned by the given user.
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Listing>>;

    /// Title relevance search, optionally restricted by type. Results
    /// order by relevance, most relevant first.
    async fn search_titles(&self, text: &str, kind: Option<ListingType>)
        -> Result<Vec<Listing>>;
}
