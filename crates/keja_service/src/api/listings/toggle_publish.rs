use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::listings::toggle_publish::toggle_publish;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::{fetch_listing, require_owner};

#[derive(Debug, Serialize, ToSchema)]
pub struct TogglePublishResponse {
    pub is_published: bool,
    pub message: String,
}

/// Flips listing visibility, owner only
#[utoipa::path(
        post,
        tag = "listings",
        operation_id = "toggle_publish",
        path = "/listings/{key}/toggle_publish",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        responses(
            (status = 200, body = TogglePublishResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn toggle_publish_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(key): Path<String>,
) -> Result<Json<TogglePublishResponse>, (StatusCode, String)> {
    let listing = fetch_listing(&ctx.db, &key).await?;
    require_owner(&listing, &user)?;

    let is_published = toggle_publish(&ctx.db, listing.id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to toggle publication");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to toggle publication".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "listing not found".to_string()))?;

    let message = if is_published {
        "listing published successfully"
    } else {
        "listing unpublished successfully"
    };

    Ok(Json(TogglePublishResponse {
        is_published,
        message: message.to_string(),
    }))
}
