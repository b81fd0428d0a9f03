use anyhow::{Context, Result};
use model::listing::ListingImage;
use sqlx::{Pool, Postgres};

#[tracing::instrument(skip(db))]
pub async fn add_image(
    db: &Pool<Postgres>,
    listing_id: i64,
    file_path: &str,
) -> Result<ListingImage> {
    let image = sqlx::query_as::<_, ListingImage>(
        r#"
        INSERT INTO listing_images (listing_id, file_path)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(listing_id)
    .bind(file_path)
    .fetch_one(db)
    .await
    .context("unable to add listing image")?;

    Ok(image)
}
