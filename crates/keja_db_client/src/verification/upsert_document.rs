use anyhow::{Context, Result};
use model::verification::VerificationDocument;
use sqlx::{Pool, Postgres};

/// Each account holds at most one identity document. Re-uploading replaces
/// the file and resets the review to pending.
#[tracing::instrument(skip(db))]
pub async fn upsert_document(
    db: &Pool<Postgres>,
    user_id: i64,
    file_path: &str,
) -> Result<VerificationDocument> {
    let document = sqlx::query_as::<_, VerificationDocument>(
        r#"
        INSERT INTO verification_documents (user_id, file_path)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE
        SET file_path = EXCLUDED.file_path,
            status = 'pending',
            rejection_reason = '',
            uploaded_at = now(),
            reviewed_at = NULL
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(file_path)
    .fetch_one(db)
    .await
    .context("unable to upsert verification document")?;

    Ok(document)
}
