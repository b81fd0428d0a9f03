use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::messages::mark_read::mark_read;
use model::response::MessageResponse;

use crate::api::context::AppState;
use crate::api::inquiries::fetch_inquiry;

/// Bulk-flags the counterparty's messages in this thread as read
#[utoipa::path(
        post,
        tag = "inquiries",
        operation_id = "mark_inquiry_read",
        path = "/inquiries/{id}/mark_read",
        params(
            ("id" = i64, Path, description = "inquiry id")
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
pub async fn mark_read_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let inquiry = fetch_inquiry(&ctx.db, id).await?;
    if !user.is_staff && !inquiry.is_participant(user.id) {
        return Err((StatusCode::FORBIDDEN, "not authorized".to_string()));
    }

    mark_read(&ctx.db, inquiry.id, user.id).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to mark messages read");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to mark messages read".to_string(),
        )
    })?;

    Ok(Json(MessageResponse::new("marked as read")))
}
