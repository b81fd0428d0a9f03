use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "listing_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Pending,
    Rented,
    Inactive,
}

impl FromStr for ListingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ListingStatus::Active),
            "pending" => Ok(ListingStatus::Pending),
            "rented" => Ok(ListingStatus::Rented),
            "inactive" => Ok(ListingStatus::Inactive),
            _ => Err(()),
        }
    }
}

/// A listing is addressable by its numeric id or its slug on the same
/// endpoints. All-digit path segments are treated as ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingKey {
    Id(i64),
    Slug(String),
}

impl ListingKey {
    pub fn parse(s: &str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = s.parse::<i64>() {
                return ListingKey::Id(id);
            }
        }
        ListingKey::Slug(s.to_string())
    }
}

impl FromStr for ListingKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ListingKey::parse(s))
    }
}

/// Listing row joined with the owning account's public columns
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ListingRecord {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub property_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub rent_per_month: i64,
    pub deposit: i64,
    pub location: String,
    pub contact_phone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenities: Json<Vec<String>>,
    pub map_embed: String,
    pub status: ListingStatus,
    pub is_published: bool,
    pub is_promoted: bool,
    pub promoted_until: Option<DateTime<Utc>>,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_verified: bool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ListingImage {
    pub id: i64,
    pub listing_id: i64,
    pub file_path: String,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingImageView {
    pub id: i64,
    pub url: String,
    pub is_primary: bool,
}

impl From<ListingImage> for ListingImageView {
    fn from(image: ListingImage) -> Self {
        Self {
            id: image.id,
            url: media_url(&image.file_path),
            is_primary: image.is_primary,
        }
    }
}

/// Uploaded files are served under the /media prefix
pub fn media_url(file_path: &str) -> String {
    format!("/media/{}", file_path)
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub property_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub rent_per_month: i64,
    pub deposit: i64,
    pub location: String,
    /// Redacted unless the viewer owns the listing or has paid for contact
    /// access
    pub contact_phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenities: Vec<String>,
    pub map_embed: String,
    pub status: ListingStatus,
    pub is_published: bool,
    pub is_promoted: bool,
    pub promoted_until: Option<DateTime<Utc>>,
    pub views: i64,
    pub images: Vec<ListingImageView>,
    pub owner_id: i64,
    pub owner_name: String,
    pub owner_verified: bool,
    pub has_access: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListingResponse {
    /// Assemble the API shape from a joined row plus its images. Contact
    /// details are only exposed to the owner or to accounts holding a
    /// completed contact-access payment.
    pub fn assemble(
        record: ListingRecord,
        images: Vec<ListingImage>,
        viewer_id: Option<i64>,
        has_paid_access: bool,
    ) -> Self {
        let is_owner = viewer_id == Some(record.owner_id);
        let has_access = is_owner || has_paid_access;
        Self {
            id: record.id,
            title: record.title,
            slug: record.slug,
            description: record.description,
            property_type: record.property_type,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            rent_per_month: record.rent_per_month,
            deposit: record.deposit,
            location: record.location,
            contact_phone: has_access.then_some(record.contact_phone),
            latitude: record.latitude,
            longitude: record.longitude,
            amenities: record.amenities.0,
            map_embed: record.map_embed,
            status: record.status,
            is_published: record.is_published,
            is_promoted: record.is_promoted,
            promoted_until: record.promoted_until,
            views: record.views,
            images: images.into_iter().map(ListingImageView::from).collect(),
            owner_id: record.owner_id,
            owner_name: record.owner_name,
            owner_verified: record.owner_verified,
            has_access,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Minimal projection for the capped map view
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct MapListing {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: i64,
    pub thumbnail: Option<String>,
    pub property_type: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_key_parses_digits_as_id() {
        assert_eq!("42".parse::<ListingKey>().unwrap(), ListingKey::Id(42));
    }

    #[test]
    fn listing_key_parses_anything_else_as_slug() {
        assert_eq!(
            "smart-hut-apartments".parse::<ListingKey>().unwrap(),
            ListingKey::Slug("smart-hut-apartments".to_string())
        );
        assert_eq!(
            "2br-in-kilimani".parse::<ListingKey>().unwrap(),
            ListingKey::Slug("2br-in-kilimani".to_string())
        );
    }
}
