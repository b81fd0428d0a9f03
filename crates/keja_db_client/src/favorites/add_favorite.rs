use anyhow::{Context, Result};
use model::favorite::Favorite;
use sqlx::{Pool, Postgres};

/// Saves a listing for an account. The pair is unique: favoriting the same
/// listing twice returns the existing row.
#[tracing::instrument(skip(db))]
pub async fn add_favorite(db: &Pool<Postgres>, user_id: i64, listing_id: i64) -> Result<Favorite> {
    let existing = sqlx::query_as::<_, Favorite>(
        "SELECT * FROM favorites WHERE user_id = $1 AND listing_id = $2",
    )
    .bind(user_id)
    .bind(listing_id)
    .fetch_optional(db)
    .await
    .context("unable to check existing favorite")?;

    if let Some(favorite) = existing {
        return Ok(favorite);
    }

    let favorite = sqlx::query_as::<_, Favorite>(
        r#"
        INSERT INTO favorites (user_id, listing_id)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(listing_id)
    .fetch_one(db)
    .await
    .context("unable to add favorite")?;

    Ok(favorite)
}
