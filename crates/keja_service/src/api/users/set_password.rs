use axum::{extract::State, http::StatusCode, Json};
use keja_auth::password::{hash_password, verify_password};
use keja_auth::AuthUser;
use model::response::MessageResponse;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::users::current_user;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetPasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[utoipa::path(
        post,
        tag = "users",
        operation_id = "set_password",
        path = "/users/set_password",
        request_body = SetPasswordRequest,
        responses(
            (status = 200, body = MessageResponse),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn set_password_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<SetPasswordRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    if req.old_password.is_empty() || req.new_password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "both old_password and new_password are required".to_string(),
        ));
    }

    let account = current_user(&ctx.db, user.id).await?;
    if !verify_password(&req.old_password, &account.password_hash) {
        return Err((
            StatusCode::BAD_REQUEST,
            "current password is incorrect".to_string(),
        ));
    }

    let password_hash = hash_password(&req.new_password).map_err(|e| {
        tracing::error!(error = ?e, "unable to hash password");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to update password".to_string(),
        )
    })?;

    keja_db_client::users::set_password::set_password(&ctx.db, user.id, &password_hash)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to set password");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to update password".to_string(),
            )
        })?;

    Ok(Json(MessageResponse::new("password updated successfully")))
}
