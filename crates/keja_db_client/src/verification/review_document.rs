use anyhow::{Context, Result};
use model::verification::{DocumentStatus, VerificationDocument};
use sqlx::{Pool, Postgres};

/// Operator decision on an identity document. Approval cascades to the
/// account's verified flag inside the same transaction.
#[tracing::instrument(skip(db))]
pub async fn review_document(
    db: &Pool<Postgres>,
    document_id: i64,
    status: DocumentStatus,
    rejection_reason: &str,
) -> Result<Option<VerificationDocument>> {
    let mut transaction = db.begin().await.context("unable to begin transaction")?;

    let document = sqlx::query_as::<_, VerificationDocument>(
        r#"
        UPDATE verification_documents
        SET status = $2, rejection_reason = $3, reviewed_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(document_id)
    .bind(status)
    .bind(rejection_reason)
    .fetch_optional(&mut *transaction)
    .await
    .context("unable to review verification document")?;

    let Some(document) = document else {
        transaction
            .rollback()
            .await
            .context("unable to roll back transaction")?;
        return Ok(None);
    };

    if document.status == DocumentStatus::Approved {
        sqlx::query(
            r#"
            UPDATE users
            SET is_verified = TRUE, verification_date = now(), updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(document.user_id)
        .execute(&mut *transaction)
        .await
        .context("unable to mark document owner verified")?;
    }

    transaction
        .commit()
        .await
        .context("unable to commit transaction")?;

    Ok(Some(document))
}
