use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use keja_db_client::favorites::add_favorite::add_favorite;
use keja_db_client::listings::get_listing::get_listing;
use model::favorite::FavoriteResponse;
use model::listing::ListingKey;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::view::listing_response;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFavoriteRequest {
    pub listing_id: i64,
}

/// Saves a listing. Saving the same listing twice is a no-op returning the
/// existing favorite.
#[utoipa::path(
        post,
        tag = "favorites",
        operation_id = "create_favorite",
        path = "/favorites",
        request_body = CreateFavoriteRequest,
        responses(
            (status = 201, body = FavoriteResponse),
            (status = 401, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn create_favorite_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateFavoriteRequest>,
) -> Result<(StatusCode, Json<FavoriteResponse>), (StatusCode, String)> {
    let internal = |e: anyhow::Error| {
        tracing::error!(error = ?e, "unable to create favorite");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to create favorite".to_string(),
        )
    };

    let record = get_listing(&ctx.db, &ListingKey::Id(req.listing_id))
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "listing not found".to_string()))?;

    let favorite = add_favorite(&ctx.db, user.id, req.listing_id)
        .await
        .map_err(internal)?;

    let listing = listing_response(&ctx.db, record, Some(&user))
        .await
        .map_err(internal)?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteResponse {
            id: favorite.id,
            listing,
            created_at: favorite.created_at,
        }),
    ))
}
