use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

#[tracing::instrument(skip(db, password_hash))]
pub async fn set_password(db: &Pool<Postgres>, id: i64, password_hash: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $2, updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(password_hash)
    .execute(db)
    .await
    .context("unable to set password")?;

    Ok(result.rows_affected() > 0)
}
