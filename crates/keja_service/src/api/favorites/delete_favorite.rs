use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::favorites::remove_favorite::remove_favorite;
use model::response::MessageResponse;

use crate::api::context::AppState;

#[utoipa::path(
        delete,
        tag = "favorites",
        operation_id = "delete_favorite",
        path = "/favorites/{id}",
        params(
            ("id" = i64, Path, description = "favorite id")
        ),
        responses(
            (status = 200, body = MessageResponse),
            (status = 401, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn delete_favorite_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let removed = remove_favorite(&ctx.db, user.id, id).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to remove favorite");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to remove favorite".to_string(),
        )
    })?;

    if !removed {
        return Err((StatusCode::NOT_FOUND, "favorite not found".to_string()));
    }

    Ok(Json(MessageResponse::new("favorite removed")))
}
