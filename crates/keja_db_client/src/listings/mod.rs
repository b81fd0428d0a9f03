pub mod counts;
pub mod create_listing;
pub mod delete_listing;
pub mod get_listing;
pub mod increment_views;
pub mod map_listings;
pub mod promote_listing;
pub mod search_listings;
pub mod stats;
pub mod toggle_publish;
pub mod update_listing;

/// Listing rows are always read joined with the owning account's public
/// columns; see [model::listing::ListingRecord].
pub(crate) const LISTING_SELECT: &str = r#"
    SELECT
        l.id, l.owner_id, l.title, l.slug, l.description, l.property_type,
        l.bedrooms, l.bathrooms, l.rent_per_month, l.deposit, l.location,
        l.contact_phone, l.latitude, l.longitude, l.amenities, l.map_embed,
        l.status, l.is_published, l.is_promoted, l.promoted_until, l.views,
        l.created_at, l.updated_at,
        u.username AS owner_name, u.is_verified AS owner_verified
    FROM listings l
    JOIN users u ON u.id = l.owner_id
"#;
