use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use keja_db_client::favorites::list_favorites::list_favorites;
use keja_db_client::listings::get_listing::get_listings_by_ids;
use model::favorite::FavoriteResponse;
use std::collections::HashMap;

use crate::api::context::AppState;
use crate::api::listings::view::listing_responses;

/// The caller's saved listings, each with the full listing embedded
#[utoipa::path(
        get,
        tag = "favorites",
        operation_id = "list_favorites",
        path = "/favorites",
        responses(
            (status = 200, body = Vec<FavoriteResponse>),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn list_favorites_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<FavoriteResponse>>, (StatusCode, String)> {
    let internal = |e: anyhow::Error| {
        tracing::error!(error = ?e, "unable to list favorites");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to list favorites".to_string(),
        )
    };

    let favorites = list_favorites(&ctx.db, user.id).await.map_err(internal)?;

    let listing_ids: Vec<i64> = favorites.iter().map(|f| f.listing_id).collect();
    let records = get_listings_by_ids(&ctx.db, &listing_ids)
        .await
        .map_err(internal)?;
    let listings = listing_responses(&ctx.db, records, Some(&user))
        .await
        .map_err(internal)?;

    let mut by_id: HashMap<i64, _> = listings.into_iter().map(|l| (l.id, l)).collect();

    // A favorite whose listing disappeared underneath it is dropped
    let responses = favorites
        .into_iter()
        .filter_map(|favorite| {
            by_id.remove(&favorite.listing_id).map(|listing| FavoriteResponse {
                id: favorite.id,
                listing,
                created_at: favorite.created_at,
            })
        })
        .collect();

    Ok(Json(responses))
}
