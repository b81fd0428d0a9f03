use anyhow::{Context, Result};
use model::inquiry::InquiryRecord;
use sqlx::{Pool, Postgres, QueryBuilder};

use super::INQUIRY_SELECT;

/// Who the inquiry list is for
#[derive(Debug, Clone, Copy)]
pub enum InquiryScope {
    /// Staff see every inquiry
    All,
    /// Regular accounts see inquiries they opened plus inquiries against
    /// their own listings
    Participant(i64),
}

#[tracing::instrument(skip(db))]
pub async fn list_inquiries(
    db: &Pool<Postgres>,
    scope: InquiryScope,
    listing_id: Option<i64>,
) -> Result<Vec<InquiryRecord>> {
    let mut qb = QueryBuilder::<Postgres>::new(INQUIRY_SELECT);
    qb.push(" WHERE TRUE");

    if let InquiryScope::Participant(user_id) = scope {
        qb.push(" AND (i.user_id = ")
            .push_bind(user_id)
            .push(" OR l.owner_id = ")
            .push_bind(user_id)
            .push(")");
    }
    if let Some(listing_id) = listing_id {
        qb.push(" AND i.listing_id = ").push_bind(listing_id);
    }

    qb.push(" ORDER BY i.created_at DESC");

    let inquiries = qb
        .build_query_as::<InquiryRecord>()
        .fetch_all(db)
        .await
        .context("unable to list inquiries")?;

    Ok(inquiries)
}
