use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

/// Contact access is a global, non-expiring entitlement: any completed
/// contact-access payment unlocks owner phone numbers for the account.
/// Derived from payment history on every check instead of a stored flag.
#[tracing::instrument(skip(db))]
pub async fn has_contact_access(db: &Pool<Postgres>, user_id: i64) -> Result<bool> {
    let (has_access,) = sqlx::query_as::<_, (bool,)>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM payments
            WHERE user_id = $1
              AND payment_type = 'contact_access'
              AND status = 'completed'
        )
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await
    .context("unable to check contact access")?;

    Ok(has_access)
}
