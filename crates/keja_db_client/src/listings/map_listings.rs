use anyhow::{Context, Result};
use model::listing::MapListing;
use sqlx::{Pool, Postgres, QueryBuilder};

use super::search_listings::{push_filters, ListingSearch};

/// Hard cap on the map projection; high enough for a city view, low enough
/// to keep the payload sane
pub const MAP_RESULT_CAP: i64 = 500;

/// Minimal projection of geotagged listings for map display. Same filter
/// pipeline as the main search, capped at [MAP_RESULT_CAP] rows. The
/// thumbnail picks the flagged-primary image, falling back to any image.
#[tracing::instrument(skip(db))]
pub async fn map_listings(db: &Pool<Postgres>, search: &ListingSearch) -> Result<Vec<MapListing>> {
    let mut qb = QueryBuilder::<Postgres>::new(
        r#"
        SELECT
            l.id, l.slug, l.title, l.latitude, l.longitude,
            l.rent_per_month AS price,
            (SELECT i.file_path FROM listing_images i
             WHERE i.listing_id = l.id
             ORDER BY i.is_primary DESC, i.id ASC
             LIMIT 1) AS thumbnail,
            l.property_type, l.location
        FROM listings l
        JOIN users u ON u.id = l.owner_id
        WHERE l.latitude IS NOT NULL AND l.longitude IS NOT NULL
        "#,
    );
    push_filters(&mut qb, search);
    qb.push(" ORDER BY l.is_promoted DESC, l.created_at DESC LIMIT ");
    qb.push_bind(MAP_RESULT_CAP);

    let listings = qb
        .build_query_as::<MapListing>()
        .fetch_all(db)
        .await
        .context("unable to load map listings")?;

    Ok(listings)
}
