use anyhow::{Context, Result};
use model::verification::VerificationDocument;
use sqlx::{Pool, Postgres};

#[tracing::instrument(skip(db))]
pub async fn get_document_for_user(
    db: &Pool<Postgres>,
    user_id: i64,
) -> Result<Option<VerificationDocument>> {
    let document = sqlx::query_as::<_, VerificationDocument>(
        "SELECT * FROM verification_documents WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("unable to get verification document")?;

    Ok(document)
}
