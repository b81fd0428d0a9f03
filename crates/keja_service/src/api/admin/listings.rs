use axum::{extract::State, http::StatusCode, Json};
use keja_auth::Staff;
use keja_db_client::listings::search_listings::{search_listings, ListingSearch};
use model::listing::ListingResponse;

use crate::api::context::AppState;
use crate::api::listings::view::listing_responses;

/// Every listing regardless of status or publication, for moderation
#[utoipa::path(
        get,
        tag = "admin",
        operation_id = "admin_all_listings",
        path = "/admin/listings",
        responses(
            (status = 200, body = Vec<ListingResponse>),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn all_listings_handler(
    State(ctx): State<AppState>,
    Staff(user): Staff,
) -> Result<Json<Vec<ListingResponse>>, (StatusCode, String)> {
    let internal = |e: anyhow::Error| {
        tracing::error!(error = ?e, "unable to list listings");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to list listings".to_string(),
        )
    };

    let records = search_listings(&ctx.db, &ListingSearch::default())
        .await
        .map_err(internal)?;
    let listings = listing_responses(&ctx.db, records, Some(&user))
        .await
        .map_err(internal)?;

    Ok(Json(listings))
}
