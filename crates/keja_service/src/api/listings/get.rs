use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::MaybeUser;
use model::listing::ListingResponse;

use crate::api::context::AppState;
use crate::api::listings::fetch_listing;
use crate::api::listings::view::listing_response;

/// Listing detail, addressable by numeric id or slug
#[utoipa::path(
        get,
        tag = "listings",
        operation_id = "get_listing",
        path = "/listings/{key}",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        responses(
            (status = 200, body = ListingResponse),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_listing_handler(
    State(ctx): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Path(key): Path<String>,
) -> Result<Json<ListingResponse>, (StatusCode, String)> {
    let record = fetch_listing(&ctx.db, &key).await?;

    let listing = listing_response(&ctx.db, record, viewer.as_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to assemble listing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to assemble listing".to_string(),
            )
        })?;

    Ok(Json(listing))
}
