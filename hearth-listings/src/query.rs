use std::sync::Arc;

use serde::Serialize;

use hearth_core::{Listing, ListingId, ListingType, Result, UserId};
use hearth_storage::ObjectStore;

use crate::store::ListingStore;

/// A listing enriched for the feed and detail views: opaque object
/// references replaced by resolved image URLs, one entry per reference,
/// in reference order. A stale reference is `None` at its position.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    #[serde(flatten)]
    pub listing: Listing,
    pub image_urls: Vec<Option<String>>,
}

/// Read side of the marketplace: the four feed/detail operations, all
/// returning [`ListingView`]s.
pub struct ListingQuery {
    listings: Arc<dyn ListingStore>,
    storage: Arc<dyn ObjectStore>,
}

impl ListingQuery {
    pub fn new(listings: Arc<dyn ListingStore>, storage: Arc<dyn ObjectStore>) -> Self {
        Self { listings, storage }
    }

    /// Every listing. Insertion order is not guaranteed by contract.
    pub async fn list_all(&self) -> Result<Vec<ListingView>> {
        let rows = self.listings.find_all().await?;
        self.enrich_all(rows).await
    }

    /// Listings of one type.
    pub async fn list_by_type(&self, kind: ListingType) -> Result<Vec<ListingView>> {
        let rows = self.listings.find_by_type(kind).await?;
        self.enrich_all(rows).await
    }

    /// Listings owned by one user.
    pub async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<ListingView>> {
        let rows = self.listings.find_by_owner(owner).await?;
        self.enrich_all(rows).await
    }

    /// Title relevance search. When `kind` is given it rides the search
    /// index's filter field inside the store; search stays the primary
    /// operator.
    pub async fn search(&self, text: &str, kind: Option<ListingType>) -> Result<Vec<ListingView>> {
        let rows = self.listings.search_titles(text, kind).await?;
        self.enrich_all(rows).await
    }

    /// One listing, or `None` when the id does not exist. Never an
    /// error for the missing case.
    pub async fn get_by_id(&self, id: &ListingId) -> Result<Option<ListingView>> {
        match self.listings.get(id).await? {
            Some(listing) => Ok(Some(self.enrich(listing).await?)),
            None => Ok(None),
        }
    }

    async fn enrich_all(&self, rows: Vec<Listing>) -> Result<Vec<ListingView>> {
        let mut views = Vec::with_capacity(rows.len());
        for listing in rows {
            views.push(self.enrich(listing).await?);
        }
        Ok(views)
    }

    async fn enrich(&self, listing: Listing) -> Result<ListingView> {
        let refs = listing.image_refs();
        let mut image_urls = Vec::with_capacity(refs.len());
        for object in &refs {
            let url = self.storage.resolve(object).await?;
            if url.is_none() {
                tracing::warn!(
                    listing_id = %listing.id,
                    object = %object,
                    "image reference no longer resolves"
                );
            }
            image_urls.push(url);
        }
        Ok(ListingView {
            listing,
            image_urls,
        })
    }
}
