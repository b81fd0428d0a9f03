use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct UserCounts {
    pub total: i64,
    pub landlords: i64,
    pub hunters: i64,
}

#[tracing::instrument(skip(db))]
pub async fn user_counts(db: &Pool<Postgres>) -> Result<UserCounts> {
    let counts = sqlx::query_as::<_, UserCounts>(
        r#"
        SELECT
            COUNT(*) AS total,
            COUNT(*) FILTER (WHERE role = 'landlord') AS landlords,
            COUNT(*) FILTER (WHERE role = 'hunter') AS hunters
        FROM users
        "#,
    )
    .fetch_one(db)
    .await
    .context("unable to count users")?;

    Ok(counts)
}
