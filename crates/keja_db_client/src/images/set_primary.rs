use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

/// Flags one image as primary. Reset-then-set inside a transaction keeps at
/// most one primary per listing.
#[tracing::instrument(skip(db))]
pub async fn set_primary(db: &Pool<Postgres>, listing_id: i64, image_id: i64) -> Result<bool> {
    let mut transaction = db.begin().await.context("unable to begin transaction")?;

    sqlx::query("UPDATE listing_images SET is_primary = FALSE WHERE listing_id = $1")
        .bind(listing_id)
        .execute(&mut *transaction)
        .await
        .context("unable to reset primary images")?;

    let result = sqlx::query(
        "UPDATE listing_images SET is_primary = TRUE WHERE id = $1 AND listing_id = $2",
    )
    .bind(image_id)
    .bind(listing_id)
    .execute(&mut *transaction)
    .await
    .context("unable to set primary image")?;

    if result.rows_affected() == 0 {
        transaction
            .rollback()
            .await
            .context("unable to roll back transaction")?;
        return Ok(false);
    }

    transaction
        .commit()
        .await
        .context("unable to commit transaction")?;

    Ok(true)
}
