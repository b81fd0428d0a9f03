use anyhow::{Context, Result};
use model::listing::ListingImage;
use sqlx::{Pool, Postgres};

#[tracing::instrument(skip(db))]
pub async fn get_images(db: &Pool<Postgres>, listing_id: i64) -> Result<Vec<ListingImage>> {
    let images = sqlx::query_as::<_, ListingImage>(
        r#"
        SELECT * FROM listing_images
        WHERE listing_id = $1
        ORDER BY is_primary DESC, id ASC
        "#,
    )
    .bind(listing_id)
    .fetch_all(db)
    .await
    .context("unable to get listing images")?;

    Ok(images)
}

/// Batch fetch for list endpoints, avoids one image query per listing
#[tracing::instrument(skip(db, listing_ids))]
pub async fn get_images_for_listings(
    db: &Pool<Postgres>,
    listing_ids: &[i64],
) -> Result<Vec<ListingImage>> {
    let images = sqlx::query_as::<_, ListingImage>(
        r#"
        SELECT * FROM listing_images
        WHERE listing_id = ANY($1)
        ORDER BY is_primary DESC, id ASC
        "#,
    )
    .bind(listing_ids)
    .fetch_all(db)
    .await
    .context("unable to get images for listings")?;

    Ok(images)
}
