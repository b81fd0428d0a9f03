use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

/// Flips listing visibility, returning the new value
#[tracing::instrument(skip(db))]
pub async fn toggle_publish(db: &Pool<Postgres>, id: i64) -> Result<Option<bool>> {
    let published = sqlx::query_as::<_, (bool,)>(
        r#"
        UPDATE listings
        SET is_published = NOT is_published, updated_at = now()
        WHERE id = $1
        RETURNING is_published
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("unable to toggle listing publication")?;

    Ok(published.map(|(is_published,)| is_published))
}
