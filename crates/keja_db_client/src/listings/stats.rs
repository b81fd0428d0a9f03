use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use sqlx::{Pool, Postgres};

#[derive(Debug, Clone, Copy)]
pub struct ListingStats {
    pub views: i64,
    pub favorites: i64,
    pub inquiries_total: i64,
    pub inquiries_last_7_days: i64,
    pub inquiries_last_30_days: i64,
}

/// Engagement numbers for one listing
#[tracing::instrument(skip(db))]
pub async fn listing_stats(db: &Pool<Postgres>, listing_id: i64) -> Result<ListingStats> {
    let (views,) = sqlx::query_as::<_, (i64,)>("SELECT views FROM listings WHERE id = $1")
        .bind(listing_id)
        .fetch_one(db)
        .await
        .context("unable to read listing views")?;

    let (favorites,) =
        sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM favorites WHERE listing_id = $1")
            .bind(listing_id)
            .fetch_one(db)
            .await
            .context("unable to count favorites")?;

    let now = Utc::now();
    let (total, last_7, last_30) = sqlx::query_as::<_, (i64, i64, i64)>(
        r#"
        SELECT
            COUNT(*),
            COUNT(*) FILTER (WHERE created_at >= $2),
            COUNT(*) FILTER (WHERE created_at >= $3)
        FROM inquiries
        WHERE listing_id = $1
        "#,
    )
    .bind(listing_id)
    .bind(now - Duration::days(7))
    .bind(now - Duration::days(30))
    .fetch_one(db)
    .await
    .context("unable to count inquiries")?;

    Ok(ListingStats {
        views,
        favorites,
        inquiries_total: total,
        inquiries_last_7_days: last_7,
        inquiries_last_30_days: last_30,
    })
}
