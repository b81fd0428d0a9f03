use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use keja_db_client::messages::create_message::create_message;
use model::inquiry::MessageWithSender;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::inquiries::fetch_inquiry;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    pub inquiry: i64,
    pub content: String,
}

#[utoipa::path(
        post,
        tag = "messages",
        operation_id = "create_message",
        path = "/messages",
        request_body = CreateMessageRequest,
        responses(
            (status = 201, body = MessageWithSender),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn create_message_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageWithSender>), (StatusCode, String)> {
    if req.content.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "content is required".to_string()));
    }

    let inquiry = fetch_inquiry(&ctx.db, req.inquiry).await?;
    if !inquiry.is_participant(user.id) {
        return Err((
            StatusCode::FORBIDDEN,
            "you don't have permission to send messages in this conversation".to_string(),
        ));
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

    Ok((StatusCode::CREATED, Json(message)))
}
