use anyhow::{Context, Result};
use model::user::User;
use sqlx::{Pool, Postgres};

#[tracing::instrument(skip(db))]
pub async fn get_user(db: &Pool<Postgres>, id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
        .context("unable to get user")?;

    Ok(user)
}

/// Login lookup: the identifier may be a username or an email address
#[tracing::instrument(skip(db))]
pub async fn get_user_by_login(db: &Pool<Postgres>, login: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE username = $1 OR lower(email) = lower($1)",
    )
    .bind(login)
    .fetch_optional(db)
    .await
    .context("unable to get user by login")?;

    Ok(user)
}

#[tracing::instrument(skip(db))]
pub async fn get_user_by_email(db: &Pool<Postgres>, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE lower(email) = lower($1)")
        .bind(email)
        .fetch_optional(db)
        .await
        .context("unable to get user by email")?;

    Ok(user)
}
