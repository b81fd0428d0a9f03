use anyhow::{Context, Result};
use model::inquiry::InquiryRecord;
use sqlx::{Pool, Postgres};

use super::get_inquiry::get_inquiry;

#[derive(Debug)]
pub struct CreateInquiryOptions {
    pub listing_id: i64,
    pub user_id: i64,
    pub message: String,
    pub contact_phone: String,
}

#[tracing::instrument(skip(db, options))]
pub async fn create_inquiry(
    db: &Pool<Postgres>,
    options: CreateInquiryOptions,
) -> Result<InquiryRecord> {
    let (id,) = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO inquiries (listing_id, user_id, message, contact_phone)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(options.listing_id)
    .bind(options.user_id)
    .bind(&options.message)
    .bind(&options.contact_phone)
    .fetch_one(db)
    .await
    .context("unable to create inquiry")?;

    get_inquiry(db, id)
        .await?
        .context("inquiry missing right after insert")
}
