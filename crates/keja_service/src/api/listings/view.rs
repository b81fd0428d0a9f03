use keja_auth::AuthUser;
use keja_db_client::{images, payments};
use model::listing::{ListingRecord, ListingResponse};
use sqlx::PgPool;
use std::collections::HashMap;

/// Assembles API responses for a batch of listing rows: one query for all
/// images, one entitlement check for the viewer.
pub(crate) async fn listing_responses(
    db: &PgPool,
    records: Vec<ListingRecord>,
    viewer: Option<&AuthUser>,
) -> anyhow::Result<Vec<ListingResponse>> {
    let listing_ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    let all_images = images::get_images::get_images_for_listings(db, &listing_ids).await?;

    let mut by_listing: HashMap<i64, Vec<_>> = HashMap::new();
    for image in all_images {
        by_listing.entry(image.listing_id).or_default().push(image);
    }

    let has_paid_access = viewer_access(db, viewer).await?;
    let viewer_id = viewer.map(|u| u.id);

    Ok(records
        .into_iter()
        .map(|record| {
            let images = by_listing.remove(&record.id).unwrap_or_default();
            ListingResponse::assemble(record, images, viewer_id, has_paid_access)
        })
        .collect())
}

pub(crate) async fn listing_response(
    db: &PgPool,
    record: ListingRecord,
    viewer: Option<&AuthUser>,
) -> anyhow::Result<ListingResponse> {
    let images = images::get_images::get_images(db, record.id).await?;
    let has_paid_access = viewer_access(db, viewer).await?;
    let viewer_id = viewer.map(|u| u.id);

    Ok(ListingResponse::assemble(
        record,
        images,
        viewer_id,
        has_paid_access,
    ))
}

async fn viewer_access(db: &PgPool, viewer: Option<&AuthUser>) -> anyhow::Result<bool> {
    match viewer {
        Some(user) => payments::has_contact_access::has_contact_access(db, user.id).await,
        None => Ok(false),
    }
}
