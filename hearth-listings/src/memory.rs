use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use hearth_core::{Listing, ListingId, ListingType, Result, UserId};

use crate::index::{relevance, tokenize};
use crate::store::ListingStore;

/// In-memory reference implementation of [`ListingStore`].
///
/// The title search index is computed over the stored rows at query
/// time; the `type` filter field is checked during the same scan, so a
/// type-scoped search never materializes the unscoped result first.
#[derive(Default)]
pub struct MemoryListingStore {
    listings: RwLock<HashMap<String, Listing>>,
}

impl MemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listing rows, for tests.
    pub async fn listing_count(&self) -> usize {
        self.listings.read().await.len()
    }
}

#[async_trait]
impl ListingStore for MemoryListingStore {
    async fn insert(&self, listing: Listing) -> Result<Listing> {
        self.listings
            .write()
            .await
            .insert(listing.id.as_str().to_string(), listing.clone());
        tracing::debug!(listing_id = %listing.id, kind = listing.kind.as_str(), "listing stored");
        Ok(listing)
    }

    async fn get(&self, id: &ListingId) -> Result<Option<Listing>> {
        Ok(self.listings.read().await.get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Listing>> {
        let mut all: Vec<Listing> = self.listings.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_type(&self, kind: ListingType) -> Result<Vec<Listing>> {
        let mut rows: Vec<Listing> = self
            .listings
            .read()
            .await
            .values()
            .filter(|l| l.kind == kind)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Listing>> {
        let mut rows: Vec<Listing> = self
            .listings
            .read()
            .await
            .values()
            .filter(|l| &l.owner_id == owner)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn search_titles(
        &self,
        text: &str,
        kind: Option<ListingType>,
    ) -> Result<Vec<Listing>> {
        let query_tokens = tokenize(text);
        if query_tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, Listing)> = self
            .listings
            .read()
            .await
            .values()
            .filter(|l| kind.map_or(true, |k| l.kind == k))
            .filter_map(|l| {
                let score = relevance(&tokenize(&l.title), &query_tokens);
                (score > 0).then(|| (score, l.clone()))
            })
            .collect();

        // Most relevant first, newest first on ties.
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.created_at.cmp(&a.1.created_at)));
        Ok(scored.into_iter().map(|(_, l)| l).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hearth_core::ObjectRef;

    fn listing(title: &str, kind: ListingType, owner: &UserId) -> Listing {
        Listing {
            id: ListingId::new(),
            title: title.to_string(),
            description: "desc".to_string(),
            price: 100.0,
            location: "Entebbe".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            kind,
            images: vec![ObjectRef::new()],
            storage_id: None,
            owner_id: owner.clone(),
            created_at: Utc::now(),
            phone: None,
        }
    }

    async fn seeded() -> (MemoryListingStore, UserId) {
        let store = MemoryListingStore::new();
        let owner = UserId::new();
        for (title, kind) in [
            ("Modern Beachfront Villa", ListingType::Sell),
            ("Downtown Villa Apartment", ListingType::Rent),
            ("Cozy Lake Cottage", ListingType::Bnb),
        ] {
            store.insert(listing(title, kind, &owner)).await.unwrap();
        }
        (store, owner)
    }

    #[tokio::test]
    async fn find_by_type_returns_only_that_type() {
        let (store, _) = seeded().await;
        let rent = store.find_by_type(ListingType::Rent).await.unwrap();
        assert_eq!(rent.len(), 1);
        assert!(rent.iter().all(|l| l.kind == ListingType::Rent));
    }

    #[tokio::test]
    async fn union_of_types_equals_find_all() {
        let (store, _) = seeded().await;
        let mut union: Vec<String> = Vec::new();
        for kind in ListingType::ALL {
            for l in store.find_by_type(kind).await.unwrap() {
                union.push(l.id.as_str().to_string());
            }
        }
        let mut all: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.id.as_str().to_string())
            .collect();
        union.sort();
        all.sort();
        assert_eq!(union, all);
    }

    #[tokio::test]
    async fn search_matches_titles_by_relevance() {
        let (store, _) = seeded().await;
        let hits = store.search_titles("Villa", None).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|l| l.title.contains("Villa")));
    }

    #[tokio::test]
    async fn type_scoped_search_is_a_subset_of_unscoped() {
        let (store, _) = seeded().await;
        let scoped = store
            .search_titles("Villa", Some(ListingType::Sell))
            .await
            .unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].kind, ListingType::Sell);

        let unscoped = store.search_titles("Villa", None).await.unwrap();
        for hit in &scoped {
            assert!(unscoped.iter().any(|l| l.id == hit.id));
        }
    }

    #[tokio::test]
    async fn search_with_no_matches_is_empty() {
        let (store, _) = seeded().await;
        assert!(store
            .search_titles("castle", None)
            .await
            .unwrap()
            .is_empty());
        assert!(store.search_titles("   ", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_owner_filters_on_owner_id() {
        let (store, owner) = seeded().await;
        let stranger = UserId::new();
        assert_eq!(store.find_by_owner(&owner).await.unwrap().len(), 3);
        assert!(store.find_by_owner(&stranger).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_of_unknown_id_is_none() {
        let (store, _) = seeded().await;
        assert!(store.get(&ListingId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn more_matched_tokens_rank_higher() {
        let (store, owner) = seeded().await;
        store
            .insert(listing("Modern Villa", ListingType::Sell, &owner))
            .await
            .unwrap();

        let hits = store.search_titles("Modern Villa", None).await.unwrap();
        // Both "Modern ..." titles match both tokens; the single-token
        // "Downtown Villa Apartment" ranks last.
        assert_eq!(hits.last().unwrap().title, "Downtown Villa Apartment");
    }
}
