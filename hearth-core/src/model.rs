use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ExternalId, ListingId, ObjectRef, UserId};

/// Role chosen at onboarding. Never edited afterwards in this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Landlord,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Landlord => "landlord",
            Role::Viewer => "viewer",
        }
    }
}

/// A user record, keyed internally by [`UserId`] and externally by the
/// identity collaborator's [`ExternalId`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub external_id: ExternalId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
}

/// What kind of deal a listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sell,
    Rent,
    Bnb,
}

impl ListingType {
    /// All listing types, in a fixed order.
    pub const ALL: [ListingType; 3] = [ListingType::Sell, ListingType::Rent, ListingType::Bnb];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sell => "sell",
            ListingType::Rent => "rent",
            ListingType::Bnb => "bnb",
        }
    }
}

/// A property listing. Immutable after creation in this core.
///
/// Two image fields exist because of an uncoordinated schema migration:
/// older rows carry a singular `storage_id`, newer rows a list of
/// `images`. Reads go through [`Listing::image_refs`]; writes only ever
/// populate the list form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "type")]
    pub kind: ListingType,
    #[serde(default)]
    pub images: Vec<ObjectRef>,
    #[serde(default)]
    pub storage_id: Option<ObjectRef>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub phone: Option<String>,
}

impl Listing {
    /// The one logical "image references" attribute behind the dual
    /// schema fields: a non-empty list wins, then the singular field,
    /// then nothing.
    pub fn image_refs(&self) -> Vec<ObjectRef> {
        if !self.images.is_empty() {
            self.images.clone()
        } else if let Some(storage_id) = &self.storage_id {
            vec![storage_id.clone()]
        } else {
            Vec::new()
        }
    }
}

/// Client-supplied fields for a new listing.
///
/// The id and `created_at` are assigned at commit time, never by the
/// caller.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kind: ListingType,
    pub images: Vec<ObjectRef>,
    pub phone: Option<String>,
}

impl ListingDraft {
    pub fn new<S: Into<String>>(title: S, kind: ListingType) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            price: 0.0,
            location: String::new(),
            bedrooms: 0,
            bathrooms: 0,
            kind,
            images: Vec::new(),
            phone: None,
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_rooms(mut self, bedrooms: u32, bathrooms: u32) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self
    }

    pub fn with_image(mut self, image: ObjectRef) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_images(mut self, images: Vec<ObjectRef>) -> Self {
        self.images = images;
        self
    }

    pub fn with_phone<S: Into<String>>(mut self, phone: S) -> Self {
        self.phone = Some(phone.into());
        self
    }
}
