use anyhow::{Context, Result};
use model::payment::PaymentWithContext;
use sqlx::{Pool, Postgres};

const PAYMENT_SELECT: &str = r#"
    SELECT
        p.id, p.user_id, u.username AS user_name,
        p.listing_id, l.title AS listing_title,
        p.payment_type, p.amount, p.status, p.reference, p.method,
        p.created_at, p.completed_at
    FROM payments p
    JOIN users u ON u.id = p.user_id
    LEFT JOIN listings l ON l.id = p.listing_id
"#;

#[tracing::instrument(skip(db))]
pub async fn list_payments_for_user(
    db: &Pool<Postgres>,
    user_id: i64,
) -> Result<Vec<PaymentWithContext>> {
    let payments = sqlx::query_as::<_, PaymentWithContext>(&format!(
        "{PAYMENT_SELECT} WHERE p.user_id = $1 ORDER BY p.created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("unable to list payments for user")?;

    Ok(payments)
}

/// Staff view across all accounts
#[tracing::instrument(skip(db))]
pub async fn list_all_payments(db: &Pool<Postgres>) -> Result<Vec<PaymentWithContext>> {
    let payments = sqlx::query_as::<_, PaymentWithContext>(&format!(
        "{PAYMENT_SELECT} ORDER BY p.created_at DESC"
    ))
    .fetch_all(db)
    .await
    .context("unable to list payments")?;

    Ok(payments)
}

#[tracing::instrument(skip(db))]
pub async fn recent_payments(db: &Pool<Postgres>, limit: i64) -> Result<Vec<PaymentWithContext>> {
    let payments = sqlx::query_as::<_, PaymentWithContext>(&format!(
        "{PAYMENT_SELECT} ORDER BY p.created_at DESC LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(db)
    .await
    .context("unable to list recent payments")?;

    Ok(payments)
}
