use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

#[tracing::instrument(skip(db))]
pub async fn delete_listing(db: &Pool<Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM listings WHERE id = $1")
        .bind(id)
        .execute(db)
        .await
        .context("unable to delete listing")?;

    Ok(result.rows_affected() > 0)
}
