use anyhow::{Context, Result};
use model::inquiry::MessageWithSender;
use sqlx::{Pool, Postgres};

use super::MESSAGE_SELECT;

#[tracing::instrument(skip(db, content))]
pub async fn create_message(
    db: &Pool<Postgres>,
    inquiry_id: i64,
    sender_id: i64,
    content: &str,
) -> Result<MessageWithSender> {
    let (id,) = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO messages (inquiry_id, sender_id, content)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(inquiry_id)
    .bind(sender_id)
    .bind(content)
    .fetch_one(db)
    .await
    .context("unable to create message")?;

    let message =
        sqlx::query_as::<_, MessageWithSender>(&format!("{MESSAGE_SELECT} WHERE m.id = $1"))
            .bind(id)
            .fetch_one(db)
            .await
            .context("message missing right after insert")?;

    Ok(message)
}
