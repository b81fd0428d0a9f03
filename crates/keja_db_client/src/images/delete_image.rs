use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

/// Deletes an image scoped to its listing, returning the stored file path so
/// the caller can clean up the file
#[tracing::instrument(skip(db))]
pub async fn delete_image(
    db: &Pool<Postgres>,
    listing_id: i64,
    image_id: i64,
) -> Result<Option<String>> {
    let deleted = sqlx::query_as::<_, (String,)>(
        r#"
        DELETE FROM listing_images
        WHERE id = $1 AND listing_id = $2
        RETURNING file_path
        "#,
    )
    .bind(image_id)
    .bind(listing_id)
    .fetch_optional(db)
    .await
    .context("unable to delete listing image")?;

    Ok(deleted.map(|(file_path,)| file_path))
}
