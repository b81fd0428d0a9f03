use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use keja_auth::MaybeUser;
use keja_db_client::listings::search_listings::search_listings;
use model::listing::ListingResponse;

use crate::api::context::AppState;
use crate::api::listings::filters::{build_search, ListingQuery};
use crate::api::listings::view::listing_responses;

/// Filtered listing search. Malformed filter values are dropped rather than
/// rejected; ordering is promoted-first, newest-first and is fixed.
#[utoipa::path(
        get,
        tag = "listings",
        operation_id = "search_listings",
        path = "/listings",
        responses(
            (status = 200, body = Vec<ListingResponse>),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn search_listings_handler(
    State(ctx): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<ListingResponse>>, (StatusCode, String)> {
    let search = build_search(&query, viewer.as_ref(), Utc::now());

    let records = search_listings(&ctx.db, &search).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to search listings");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to search listings".to_string(),
        )
    })?;

    let listings = listing_responses(&ctx.db, records, viewer.as_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to assemble listings");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to assemble listings".to_string(),
            )
        })?;

    Ok(Json(listings))
}
