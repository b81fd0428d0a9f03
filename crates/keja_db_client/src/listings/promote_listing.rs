use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

/// Activates promotion through the given expiry. A fresh purchase overwrites
/// any prior expiry rather than extending it. Owner-scoped: returns None
/// when the listing does not exist or is not owned by `owner_id`.
#[tracing::instrument(skip(db))]
pub async fn promote_listing(
    db: &Pool<Postgres>,
    id: i64,
    owner_id: i64,
    promoted_until: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>> {
    let promoted = sqlx::query_as::<_, (DateTime<Utc>,)>(
        r#"
        UPDATE listings
        SET is_promoted = TRUE, promoted_until = $3, updated_at = now()
        WHERE id = $1 AND owner_id = $2
        RETURNING promoted_until
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(promoted_until)
    .fetch_optional(db)
    .await
    .context("unable to promote listing")?;

    Ok(promoted.map(|(until,)| until))
}
