use std::sync::Arc;

use chrono::Utc;

use hearth_core::{Error, Listing, ListingDraft, ListingId, Result, Role, Rules, UserId};
use hearth_directory::UserStore;
use hearth_storage::{ObjectStore, UploadSlot};

use crate::config::MarketConfig;
use crate::store::ListingStore;

/// Runs the two-phase upload flow.
///
/// Phase 1 hands out a signed slot; phase 2 (the byte transfer) happens
/// directly between the client and storage; the commit here is the
/// terminal step and the only durable write. A transfer that fails or
/// is abandoned needs no compensation — no row exists yet — and any
/// retry starts over with a fresh slot.
pub struct UploadCoordinator {
    storage: Arc<dyn ObjectStore>,
    users: Arc<dyn UserStore>,
    listings: Arc<dyn ListingStore>,
    config: MarketConfig,
}

impl UploadCoordinator {
    pub fn new(
        storage: Arc<dyn ObjectStore>,
        users: Arc<dyn UserStore>,
        listings: Arc<dyn ListingStore>,
        config: MarketConfig,
    ) -> Self {
        Self {
            storage,
            users,
            listings,
            config,
        }
    }

    /// Phase 1: a short-lived, single-use upload slot from storage.
    pub async fn request_upload_slot(&self) -> Result<UploadSlot> {
        self.storage.issue_upload_slot().await
    }

    /// Phase 3: validate and insert the listing row.
    ///
    /// Requires at least one object reference, an existing owner, and
    /// the owner to be a landlord. `created_at` is assigned here, never
    /// taken from the caller.
    pub async fn commit_listing(&self, draft: ListingDraft, owner: &UserId) -> Result<ListingId> {
        self.validate(&draft)?;

        let owner_record = self
            .users
            .get(owner)
            .await?
            .ok_or_else(|| Error::not_found(owner.as_str()))?;
        if owner_record.role != Role::Landlord {
            return Err(Error::forbidden("Only landlords may create listings"));
        }

        let listing = Listing {
            id: ListingId::new(),
            title: draft.title,
            description: draft.description,
            price: draft.price,
            location: draft.location,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            kind: draft.kind,
            // Only the list form is written; the singular field exists
            // for reading pre-migration rows.
            images: draft.images,
            storage_id: None,
            owner_id: owner.clone(),
            created_at: Utc::now(),
            phone: draft.phone,
        };

        let listing = self.listings.insert(listing).await?;
        tracing::info!(
            listing_id = %listing.id,
            owner_id = %listing.owner_id,
            kind = listing.kind.as_str(),
            "listing committed"
        );
        Ok(listing.id)
    }

    fn validate(&self, draft: &ListingDraft) -> Result<()> {
        Rules::new()
            .non_empty("title", &draft.title)
            .non_empty("description", &draft.description)
            .non_empty("location", &draft.location)
            .non_negative("price", draft.price)
            .at_least("images", draft.images.len(), 1)
            .at_most(
                "images",
                draft.images.len(),
                self.config.max_images_per_listing,
            )
            .check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{ExternalId, ListingType, ObjectRef, User};
    use hearth_directory::MemoryUserStore;
    use hearth_storage::MemoryObjectStore;

    use crate::memory::MemoryListingStore;

    struct Fixture {
        coordinator: UploadCoordinator,
        listings: Arc<MemoryListingStore>,
        landlord: UserId,
        viewer: UserId,
    }

    async fn fixture() -> Fixture {
        let storage = Arc::new(MemoryObjectStore::default());
        let users = Arc::new(MemoryUserStore::new());
        let listings = Arc::new(MemoryListingStore::new());

        let landlord = UserId::new();
        users
            .create(User {
                id: landlord.clone(),
                external_id: ExternalId::from("clerk|landlord"),
                email: "l@example.com".to_string(),
                first_name: None,
                last_name: None,
                role: Role::Landlord,
            })
            .await
            .unwrap();

        let viewer = UserId::new();
        users
            .create(User {
                id: viewer.clone(),
                external_id: ExternalId::from("clerk|viewer"),
                email: "v@example.com".to_string(),
                first_name: None,
                last_name: None,
                role: Role::Viewer,
            })
            .await
            .unwrap();

        Fixture {
            coordinator: UploadCoordinator::new(
                storage,
                users,
                listings.clone(),
                MarketConfig::default(),
            ),
            listings,
            landlord,
            viewer,
        }
    }

    fn draft() -> ListingDraft {
        ListingDraft::new("Modern Beachfront Villa", ListingType::Sell)
            .with_description("Sea view")
            .with_price(250_000.0)
            .with_location("Entebbe")
            .with_rooms(3, 2)
            .with_image(ObjectRef::new())
    }

    #[tokio::test]
    async fn commit_assigns_id_and_server_side_created_at() {
        let fx = fixture().await;
        let before = Utc::now();
        let id = fx
            .coordinator
            .commit_listing(draft(), &fx.landlord)
            .await
            .unwrap();
        let after = Utc::now();

        let row = fx.listings.get(&id).await.unwrap().unwrap();
        assert!(row.created_at >= before && row.created_at <= after);
        assert_eq!(row.owner_id, fx.landlord);
        assert!(row.storage_id.is_none());
        assert_eq!(row.images.len(), 1);
    }

    #[tokio::test]
    async fn commit_without_object_refs_writes_nothing() {
        let fx = fixture().await;
        let no_images = ListingDraft::new("Villa", ListingType::Sell)
            .with_description("d")
            .with_location("x")
            .with_price(1.0);

        let err = fx
            .coordinator
            .commit_listing(no_images, &fx.landlord)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Invalid { .. }));
        assert_eq!(fx.listings.listing_count().await, 0);
    }

    #[tokio::test]
    async fn commit_for_unknown_owner_is_not_found() {
        let fx = fixture().await;
        let err = fx
            .coordinator
            .commit_listing(draft(), &UserId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(fx.listings.listing_count().await, 0);
    }

    #[tokio::test]
    async fn viewers_may_not_create_listings() {
        let fx = fixture().await;
        let err = fx
            .coordinator
            .commit_listing(draft(), &fx.viewer)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden { .. }));
        assert_eq!(fx.listings.listing_count().await, 0);
    }

    #[tokio::test]
    async fn too_many_images_is_rejected() {
        let fx = fixture().await;
        let mut overloaded = draft();
        for _ in 0..MarketConfig::default().max_images_per_listing {
            overloaded = overloaded.with_image(ObjectRef::new());
        }
        let err = fx
            .coordinator
            .commit_listing(overloaded, &fx.landlord)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let fx = fixture().await;
        let err = fx
            .coordinator
            .commit_listing(draft().with_price(-5.0), &fx.landlord)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Invalid { .. }));
    }
}
