use anyhow::{Context, Result};
use model::user::User;
use sqlx::{Pool, Postgres};

#[tracing::instrument(skip(db))]
pub async fn list_users(db: &Pool<Postgres>) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(db)
        .await
        .context("unable to list users")?;

    Ok(users)
}

#[tracing::instrument(skip(db))]
pub async fn recent_users(db: &Pool<Postgres>, limit: i64) -> Result<Vec<User>> {
    let users =
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC LIMIT $1")
            .bind(limit)
            .fetch_all(db)
            .await
            .context("unable to list recent users")?;

    Ok(users)
}
