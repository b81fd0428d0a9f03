use anyhow::{Context, Result};
use model::favorite::Favorite;
use sqlx::{Pool, Postgres};

#[tracing::instrument(skip(db))]
pub async fn list_favorites(db: &Pool<Postgres>, user_id: i64) -> Result<Vec<Favorite>> {
    let favorites = sqlx::query_as::<_, Favorite>(
        "SELECT * FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("unable to list favorites")?;

    Ok(favorites)
}
