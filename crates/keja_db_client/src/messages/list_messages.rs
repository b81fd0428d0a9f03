use anyhow::{Context, Result};
use model::inquiry::MessageWithSender;
use sqlx::{Pool, Postgres};

use super::MESSAGE_SELECT;

#[tracing::instrument(skip(db))]
pub async fn list_messages_for_inquiry(
    db: &Pool<Postgres>,
    inquiry_id: i64,
) -> Result<Vec<MessageWithSender>> {
    let messages = sqlx::query_as::<_, MessageWithSender>(&format!(
        "{MESSAGE_SELECT} WHERE m.inquiry_id = $1 ORDER BY m.created_at ASC"
    ))
    .bind(inquiry_id)
    .fetch_all(db)
    .await
    .context("unable to list messages for inquiry")?;

    Ok(messages)
}

/// Batch fetch for the inquiry list, avoids one message query per inquiry
#[tracing::instrument(skip(db, inquiry_ids))]
pub async fn list_messages_for_inquiries(
    db: &Pool<Postgres>,
    inquiry_ids: &[i64],
) -> Result<Vec<MessageWithSender>> {
    let messages = sqlx::query_as::<_, MessageWithSender>(&format!(
        "{MESSAGE_SELECT} WHERE m.inquiry_id = ANY($1) ORDER BY m.created_at ASC"
    ))
    .bind(inquiry_ids)
    .fetch_all(db)
    .await
    .context("unable to list messages for inquiries")?;

    Ok(messages)
}

/// Every message in conversations the account takes part in, either side
#[tracing::instrument(skip(db))]
pub async fn list_messages_for_user(
    db: &Pool<Postgres>,
    user_id: i64,
) -> Result<Vec<MessageWithSender>> {
    let messages = sqlx::query_as::<_, MessageWithSender>(&format!(
        r#"{MESSAGE_SELECT}
        JOIN inquiries i ON i.id = m.inquiry_id
        JOIN listings l ON l.id = i.listing_id
        WHERE i.user_id = $1 OR l.owner_id = $1
        ORDER BY m.created_at ASC"#
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("unable to list messages for user")?;

    Ok(messages)
}
