use anyhow::{Context, Result};
use model::payment::{Payment, PaymentType};
use sqlx::{Pool, Postgres};

#[derive(Debug)]
pub struct CompletedPaymentOptions {
    pub user_id: i64,
    pub listing_id: Option<i64>,
    pub payment_type: PaymentType,
    /// Whole KES
    pub amount: i64,
    pub reference: String,
    pub method: String,
}

/// Records a gateway-confirmed payment. The external reference is the
/// deduplication key: when a row already carries it, nothing is written and
/// None is returned, so repeated verifies of the same reference are no-ops.
#[tracing::instrument(skip(db, options))]
pub async fn record_completed_payment(
    db: &Pool<Postgres>,
    options: CompletedPaymentOptions,
) -> Result<Option<Payment>> {
    let (exists,) = sqlx::query_as::<_, (bool,)>(
        "SELECT EXISTS(SELECT 1 FROM payments WHERE reference = $1)",
    )
    .bind(&options.reference)
    .fetch_one(db)
    .await
    .context("unable to check payment reference")?;

    if exists {
        tracing::debug!(reference = %options.reference, "payment already recorded");
        return Ok(None);
    }

    let payment = sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments
            (user_id, listing_id, payment_type, amount, status, reference,
             method, completed_at)
        VALUES ($1, $2, $3, $4, 'completed', $5, $6, now())
        RETURNING *
        "#,
    )
    .bind(options.user_id)
    .bind(options.listing_id)
    .bind(options.payment_type)
    .bind(options.amount)
    .bind(&options.reference)
    .bind(&options.method)
    .fetch_one(db)
    .await
    .context("unable to record payment")?;

    Ok(Some(payment))
}
