use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::listings::delete_listing::delete_listing;
use model::response::MessageResponse;

use crate::api::context::AppState;
use crate::api::listings::{fetch_listing, require_owner};

#[utoipa::path(
        delete,
        tag = "listings",
        operation_id = "delete_listing",
        path = "/listings/{key}",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        responses(
            (status = 200, body = MessageResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn delete_listing_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let listing = fetch_listing(&ctx.db, &key).await?;
    require_owner(&listing, &user)?;

    delete_listing(&ctx.db, listing.id).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to delete listing");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to delete listing".to_string(),
        )
    })?;

    Ok(Json(MessageResponse::new("listing deleted")))
}
