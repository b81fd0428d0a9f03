use anyhow::{Context, Result};
use model::listing::{ListingKey, ListingRecord};
use sqlx::{Pool, Postgres};

use super::LISTING_SELECT;

/// Fetch a listing by numeric id or slug; both address the same resource
#[tracing::instrument(skip(db))]
pub async fn get_listing(db: &Pool<Postgres>, key: &ListingKey) -> Result<Option<ListingRecord>> {
    let query = match key {
        ListingKey::Id(_) => format!("{LISTING_SELECT} WHERE l.id = $1"),
        ListingKey::Slug(_) => format!("{LISTING_SELECT} WHERE l.slug = $1"),
    };

    let mut q = sqlx::query_as::<_, ListingRecord>(&query);
    q = match key {
        ListingKey::Id(id) => q.bind(*id),
        ListingKey::Slug(slug) => q.bind(slug.clone()),
    };

    let listing = q
        .fetch_optional(db)
        .await
        .context("unable to get listing")?;

    Ok(listing)
}

/// Batch fetch preserving no particular order; callers reorder as needed
#[tracing::instrument(skip(db, ids))]
pub async fn get_listings_by_ids(
    db: &Pool<Postgres>,
    ids: &[i64],
) -> Result<Vec<ListingRecord>> {
    let listings =
        sqlx::query_as::<_, ListingRecord>(&format!("{LISTING_SELECT} WHERE l.id = ANY($1)"))
            .bind(ids)
            .fetch_all(db)
            .await
            .context("unable to get listings by ids")?;

    Ok(listings)
}
