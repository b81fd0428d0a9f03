use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct ListingCounts {
    pub total: i64,
    pub published: i64,
}

#[tracing::instrument(skip(db))]
pub async fn listing_counts(db: &Pool<Postgres>) -> Result<ListingCounts> {
    let counts = sqlx::query_as::<_, ListingCounts>(
        r#"
        SELECT
            COUNT(*) AS total,
            COUNT(*) FILTER (WHERE is_published) AS published
        FROM listings
        "#,
    )
    .fetch_one(db)
    .await
    .context("unable to count listings")?;

    Ok(counts)
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecentListing {
    pub id: i64,
    pub title: String,
    pub owner_name: String,
    pub owner_full_name: String,
    pub created_at: DateTime<Utc>,
}

#[tracing::instrument(skip(db))]
pub async fn recent_listings(db: &Pool<Postgres>, limit: i64) -> Result<Vec<RecentListing>> {
    let listings = sqlx::query_as::<_, RecentListing>(
        r#"
        SELECT
            l.id, l.title,
            u.username AS owner_name,
            u.full_name AS owner_full_name,
            l.created_at
        FROM listings l
        JOIN users u ON u.id = l.owner_id
        ORDER BY l.created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await
    .context("unable to list recent listings")?;

    Ok(listings)
}
