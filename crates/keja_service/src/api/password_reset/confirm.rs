use axum::{extract::State, http::StatusCode, Json};
use keja_auth::password::hash_password;
use keja_auth::reset::{decode_reset_token, validate_reset_token};
use keja_db_client::users::get_user::get_user;
use model::response::MessageResponse;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::users::display_name;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConfirmResetRequest {
    pub token: String,
    pub new_password: String,
}

/// Completes a reset. The token is bound to the password hash it was issued
/// against, so it can be used at most once; the confirmation email is fire
/// and forget.
#[utoipa::path(
        post,
        tag = "password-reset",
        operation_id = "confirm_password_reset",
        path = "/password-reset/confirm",
        request_body = ConfirmResetRequest,
        responses(
            (status = 200, body = MessageResponse),
            (status = 400, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn confirm_reset_handler(
    State(ctx): State<AppState>,
    Json(req): Json<ConfirmResetRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    if req.token.is_empty() || req.new_password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "token and new password are required".to_string(),
        ));
    }
    if req.new_password.len() < MIN_PASSWORD_LENGTH {
        return Err((
            StatusCode::BAD_REQUEST,
            "password must be at least 8 characters long".to_string(),
        ));
    }

    let invalid = (StatusCode::BAD_REQUEST, "invalid reset link".to_string());

    let claims = decode_reset_token(&ctx.jwt, &req.token).map_err(|_| invalid.clone())?;

    let user = get_user(&ctx.db, claims.sub)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to load account");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to reset password".to_string(),
            )
        })?
        .ok_or_else(|| invalid.clone())?;

    validate_reset_token(&ctx.jwt, &req.token, &user.password_hash).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "invalid or expired reset link".to_string(),
        )
    })?;

    let password_hash = hash_password(&req.new_password).map_err(|e| {
        tracing::error!(error = ?e, "unable to hash password");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to reset password".to_string(),
        )
    })?;

    keja_db_client::users::set_password::set_password(&ctx.db, user.id, &password_hash)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to set password");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to reset password".to_string(),
            )
        })?;

    tracing::info!(email = %user.email, "password reset successful");

    let mailer = ctx.mailer.clone();
    let to_email = user.email.clone();
    let name = display_name(&user).to_string();
    tokio::spawn(async move {
        if let Err(e) = mailer.send_password_changed(&to_email, &name).await {
            tracing::error!(error = ?e, %to_email, "unable to send confirmation email");
        }
    });

    Ok(Json(MessageResponse::new(
        "password has been reset successfully, you can now log in with your new password",
    )))
}
