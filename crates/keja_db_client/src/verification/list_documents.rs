use anyhow::{Context, Result};
use model::verification::VerificationDocument;
use sqlx::{Pool, Postgres};

/// Operator review queue, newest uploads first
#[tracing::instrument(skip(db))]
pub async fn list_documents(db: &Pool<Postgres>) -> Result<Vec<VerificationDocument>> {
    let documents = sqlx::query_as::<_, VerificationDocument>(
        "SELECT * FROM verification_documents ORDER BY uploaded_at DESC",
    )
    .fetch_all(db)
    .await
    .context("unable to list verification documents")?;

    Ok(documents)
}

#[tracing::instrument(skip(db))]
pub async fn count_pending(db: &Pool<Postgres>) -> Result<i64> {
    let (count,) = sqlx::query_as::<_, (i64,)>(
        "SELECT COUNT(*) FROM verification_documents WHERE status = 'pending'",
    )
    .fetch_one(db)
    .await
    .context("unable to count pending verification documents")?;

    Ok(count)
}
