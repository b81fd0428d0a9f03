use axum::{
    http::StatusCode,
    routing::{delete, get, patch, post},
    Router,
};
use keja_auth::AuthUser;
use model::listing::{ListingKey, ListingRecord};
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;

use crate::api::context::AppState;

pub mod create;
pub mod delete;
pub mod delete_image;
pub mod filters;
pub mod get;
pub mod increment_views;
pub mod map;
pub mod promote;
pub mod search;
pub mod set_primary_image;
pub mod stats;
pub mod toggle_publish;
pub mod update;
pub mod upload_images;
pub mod view;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(search::search_listings_handler).layer(CompressionLayer::new()),
        )
        .route("/", post(create::create_listing_handler))
        .route("/map", get(map::map_listings_handler))
        .route("/:key", get(get::get_listing_handler))
        .route("/:key", patch(update::update_listing_handler))
        .route("/:key", delete(delete::delete_listing_handler))
        .route("/:key/stats", get(stats::listing_stats_handler))
        .route(
            "/:key/increment_views",
            post(increment_views::increment_views_handler),
        )
        .route(
            "/:key/toggle_publish",
            post(toggle_publish::toggle_publish_handler),
        )
        .route("/:key/promote", post(promote::promote_listing_handler))
        .route("/:key/images", post(upload_images::upload_images_handler))
        .route(
            "/:key/delete_image",
            post(delete_image::delete_image_handler),
        )
        .route(
            "/:key/set_primary_image",
            post(set_primary_image::set_primary_image_handler),
        )
}

/// Resolve a path segment (numeric id or slug) to a listing, 404 when absent
pub(crate) async fn fetch_listing(
    db: &PgPool,
    key: &str,
) -> Result<ListingRecord, (StatusCode, String)> {
    let key = ListingKey::parse(key);
    keja_db_client::listings::get_listing::get_listing(db, &key)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to get listing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to get listing".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "listing not found".to_string()))
}

pub(crate) fn require_owner(
    listing: &ListingRecord,
    user: &AuthUser,
) -> Result<(), (StatusCode, String)> {
    if listing.owner_id != user.id {
        return Err((
            StatusCode::FORBIDDEN,
            "only the listing owner can do this".to_string(),
        ));
    }
    Ok(())
}
