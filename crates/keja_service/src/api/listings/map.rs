use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use keja_auth::MaybeUser;
use keja_db_client::listings::map_listings::map_listings;
use model::listing::{media_url, MapListing};

use crate::api::context::AppState;
use crate::api::listings::filters::{build_search, ListingQuery};

/// Capped, minimal projection of geotagged listings for the map view
#[utoipa::path(
        get,
        tag = "listings",
        operation_id = "map_listings",
        path = "/listings/map",
        responses(
            (status = 200, body = Vec<MapListing>),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn map_listings_handler(
    State(ctx): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<MapListing>>, (StatusCode, String)> {
    let search = build_search(&query, viewer.as_ref(), Utc::now());

    let mut listings = map_listings(&ctx.db, &search).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to load map listings");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to load map listings".to_string(),
        )
    })?;

    for listing in &mut listings {
        if let Some(thumbnail) = listing.thumbnail.take() {
            listing.thumbnail = Some(media_url(&thumbnail));
        }
    }

    Ok(Json(listings))
}
