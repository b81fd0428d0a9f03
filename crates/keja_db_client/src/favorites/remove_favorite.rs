use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

/// Deletes a favorite scoped to its owner
#[tracing::instrument(skip(db))]
pub async fn remove_favorite(db: &Pool<Postgres>, user_id: i64, favorite_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
        .bind(favorite_id)
        .bind(user_id)
        .execute(db)
        .await
        .context("unable to remove favorite")?;

    Ok(result.rows_affected() > 0)
}
