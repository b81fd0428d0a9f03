use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct Revenue {
    /// All-time completed payments, whole KES
    pub total: i64,
    /// Completed payments in the current calendar month
    pub this_month: i64,
}

#[tracing::instrument(skip(db))]
pub async fn revenue(db: &Pool<Postgres>) -> Result<Revenue> {
    let revenue = sqlx::query_as::<_, Revenue>(
        r#"
        SELECT
            COALESCE(SUM(amount), 0)::BIGINT AS total,
            COALESCE(SUM(amount) FILTER (
                WHERE created_at >= date_trunc('month', now())
            ), 0)::BIGINT AS this_month
        FROM payments
        WHERE status = 'completed'
        "#,
    )
    .fetch_one(db)
    .await
    .context("unable to aggregate revenue")?;

    Ok(revenue)
}
