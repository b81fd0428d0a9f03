use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_db_client::listings::increment_views::increment_views;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::fetch_listing;

#[derive(Debug, Serialize, ToSchema)]
pub struct ViewsResponse {
    pub views: i64,
}

/// Bumps the view counter. Public: every detail-page visit calls this.
#[utoipa::path(
        post,
        tag = "listings",
        operation_id = "increment_views",
        path = "/listings/{key}/increment_views",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        responses(
            (status = 200, body = ViewsResponse),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn increment_views_handler(
    State(ctx): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ViewsResponse>, (StatusCode, String)> {
    let listing = fetch_listing(&ctx.db, &key).await?;

    let views = increment_views(&ctx.db, listing.id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to increment views");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to increment views".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "listing not found".to_string()))?;

    Ok(Json(ViewsResponse { views }))
}
