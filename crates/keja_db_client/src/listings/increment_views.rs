use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

/// Bumps the view counter and returns the new total
#[tracing::instrument(skip(db))]
pub async fn increment_views(db: &Pool<Postgres>, id: i64) -> Result<Option<i64>> {
    let views = sqlx::query_as::<_, (i64,)>(
        "UPDATE listings SET views = views + 1 WHERE id = $1 RETURNING views",
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("unable to increment views")?;

    Ok(views.map(|(views,)| views))
}
