use anyhow::{Context, Result};
use model::inquiry::InquiryRecord;
use sqlx::{Pool, Postgres};

use super::INQUIRY_SELECT;

#[tracing::instrument(skip(db))]
pub async fn get_inquiry(db: &Pool<Postgres>, id: i64) -> Result<Option<InquiryRecord>> {
    let inquiry =
        sqlx::query_as::<_, InquiryRecord>(&format!("{INQUIRY_SELECT} WHERE i.id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("unable to get inquiry")?;

    Ok(inquiry)
}
