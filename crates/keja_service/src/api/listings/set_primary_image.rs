use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::images::set_primary::set_primary;
use model::response::MessageResponse;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::{fetch_listing, require_owner};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetPrimaryImageRequest {
    pub image_id: i64,
}

/// Flags one image as the listing's primary; any previous primary is reset
#[utoipa::path(
        post,
        tag = "listings",
        operation_id = "set_primary_image",
        path = "/listings/{key}/set_primary_image",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        request_body = SetPrimaryImageRequest,
        responses(
            (status = 200, body = MessageResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn set_primary_image_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(key): Path<String>,
    Json(req): Json<SetPrimaryImageRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let listing = fetch_listing(&ctx.db, &key).await?;
    require_owner(&listing, &user)?;

    let updated = set_primary(&ctx.db, listing.id, req.image_id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to set primary image");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to set primary image".to_string(),
            )
        })?;

    if !updated {
        return Err((StatusCode::NOT_FOUND, "image not found".to_string()));
    }

    Ok(Json(MessageResponse::new("primary image updated")))
}
