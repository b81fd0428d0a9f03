use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

/// Bulk-flags everything the counterparty sent in this thread as read.
/// Messages sent by the reader stay untouched.
#[tracing::instrument(skip(db))]
pub async fn mark_read(db: &Pool<Postgres>, inquiry_id: i64, reader_id: i64) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE messages
        SET is_read = TRUE
        WHERE inquiry_id = $1 AND sender_id <> $2 AND is_read = FALSE
        "#,
    )
    .bind(inquiry_id)
    .bind(reader_id)
    .execute(db)
    .await
    .context("unable to mark messages read")?;

    Ok(result.rows_affected())
}
