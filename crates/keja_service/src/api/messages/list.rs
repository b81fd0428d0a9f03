use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::inquiries::get_inquiry::get_inquiry;
use keja_db_client::messages::list_messages::{list_messages_for_inquiry, list_messages_for_user};
use model::inquiry::MessageWithSender;
use serde::Deserialize;

use crate::api::context::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MessageListQuery {
    pub inquiry: Option<i64>,
}

/// Messages in the caller's conversations. With an inquiry filter,
/// non-participants get an empty list rather than an error.
#[utoipa::path(
        get,
        tag = "messages",
        operation_id = "list_messages",
        path = "/messages",
        responses(
            (status = 200, body = Vec<MessageWithSender>),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn list_messages_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<Vec<MessageWithSender>>, (StatusCode, String)> {
    let internal = |e: anyhow::Error| {
        tracing::error!(error = ?e, "unable to list messages");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to list messages".to_string(),
        )
    };

    let messages = match query.inquiry {
        Some(inquiry_id) => {
            let inquiry = get_inquiry(&ctx.db, inquiry_id).await.map_err(internal)?;
            match inquiry {
                Some(inquiry) if inquiry.is_participant(user.id) => {
                    list_messages_for_inquiry(&ctx.db, inquiry.id)
                        .await
                        .map_err(internal)?
                }
                _ => Vec::new(),
            }
        }
        None => list_messages_for_user(&ctx.db, user.id)
            .await
            .map_err(internal)?,
    };

    Ok(Json(messages))
}
