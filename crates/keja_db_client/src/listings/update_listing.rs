use anyhow::{Context, Result};
use model::listing::{ListingKey, ListingRecord, ListingStatus};
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use super::get_listing::get_listing;

#[derive(Debug, Default)]
pub struct UpdateListingOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub rent_per_month: Option<i64>,
    pub deposit: Option<i64>,
    pub location: Option<String>,
    pub contact_phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub map_embed: Option<String>,
    pub status: Option<ListingStatus>,
}

/// Partial update; absent fields keep their current value. The slug is
/// computed once at creation and never rewritten.
#[tracing::instrument(skip(db, options))]
pub async fn update_listing(
    db: &Pool<Postgres>,
    id: i64,
    options: UpdateListingOptions,
) -> Result<Option<ListingRecord>> {
    let result = sqlx::query(
        r#"
        UPDATE listings
        SET title = COALESCE($2, title),
            description = COALESCE($3, description),
            property_type = COALESCE($4, property_type),
            bedrooms = COALESCE($5, bedrooms),
            bathrooms = COALESCE($6, bathrooms),
            rent_per_month = COALESCE($7, rent_per_month),
            deposit = COALESCE($8, deposit),
            location = COALESCE($9, location),
            contact_phone = COALESCE($10, contact_phone),
            latitude = COALESCE($11, latitude),
            longitude = COALESCE($12, longitude),
            amenities = COALESCE($13, amenities),
            map_embed = COALESCE($14, map_embed),
            status = COALESCE($15, status),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(options.title)
    .bind(options.description)
    .bind(options.property_type)
    .bind(options.bedrooms)
    .bind(options.bathrooms)
    .bind(options.rent_per_month)
    .bind(options.deposit)
    .bind(options.location)
    .bind(options.contact_phone)
    .bind(options.latitude)
    .bind(options.longitude)
    .bind(options.amenities.map(Json))
    .bind(options.map_embed)
    .bind(options.status)
    .execute(db)
    .await
    .context("unable to update listing")?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_listing(db, &ListingKey::Id(id)).await
}
