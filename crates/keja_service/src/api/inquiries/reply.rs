use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::messages::create_message::create_message;
use model::inquiry::MessageWithSender;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::inquiries::fetch_inquiry;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplyRequest {
    pub content: String,
}

/// Adds a message to the thread. Only the inquiry creator and the listing
/// owner may reply; anyone else is a 403.
#[utoipa::path(
        post,
        tag = "inquiries",
        operation_id = "reply_to_inquiry",
        path = "/inquiries/{id}/reply",
        params(
            ("id" = i64, Path, description = "inquiry id")
        ),
        request_body = ReplyRequest,
        responses(
            (status = 200, body = MessageWithSender),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn reply_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<MessageWithSender>, (StatusCode, String)> {
    if req.content.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "content is required".to_string()));
    }

    let inquiry = fetch_inquiry(&ctx.db, id).await?;
    if !inquiry.is_participant(user.id) {
        return Err((StatusCode::FORBIDDEN, "not authorized".to_string()));
    }

    let message = create_message(&ctx.db, inquiry.id, user.id, &req.content)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to create message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to create message".to_string(),
            )
        })?;

    Ok(Json(message))
}
