use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::images::delete_image::delete_image;
use model::response::MessageResponse;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::{fetch_listing, require_owner};

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteImageRequest {
    pub image_id: i64,
}

#[utoipa::path(
        post,
        tag = "listings",
        operation_id = "delete_image",
        path = "/listings/{key}/delete_image",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        request_body = DeleteImageRequest,
        responses(
            (status = 200, body = MessageResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn delete_image_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(key): Path<String>,
    Json(req): Json<DeleteImageRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let listing = fetch_listing(&ctx.db, &key).await?;
    require_owner(&listing, &user)?;

    let file_path = delete_image(&ctx.db, listing.id, req.image_id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to delete image");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to delete image".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "image not found".to_string()))?;

    // Best effort: a stale file on disk is not worth failing the request
    let target = ctx.config.media_root.join(&file_path);
    if let Err(e) = tokio::fs::remove_file(&target).await {
        tracing::warn!(error = ?e, path = %target.display(), "unable to remove image file");
    }

    Ok(Json(MessageResponse::new("image deleted")))
}
