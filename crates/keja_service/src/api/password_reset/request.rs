use axum::{extract::State, http::StatusCode, Json};
use keja_db_client::users::get_user::get_user_by_email;
use model::response::MessageResponse;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::users::display_name;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RequestResetRequest {
    pub email: String,
}

/// Emails a signed password-reset link. Unlike the welcome email, a failed
/// send here is a hard error: without the email the flow is dead.
#[utoipa::path(
        post,
        tag = "password-reset",
        operation_id = "request_password_reset",
        path = "/password-reset/request",
        request_body = RequestResetRequest,
        responses(
            (status = 200, body = MessageResponse),
            (status = 400, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn request_reset_handler(
    State(ctx): State<AppState>,
    Json(req): Json<RequestResetRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "email is required".to_string()));
    }

    let user = get_user_by_email(&ctx.db, email)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to look up account");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to process request".to_string(),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            "no account found with this email address".to_string(),
        ))?;

    let token = keja_auth::reset::issue_reset_token(&ctx.jwt, &user).map_err(|e| {
        tracing::error!(error = ?e, "unable to issue reset token");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to process request".to_string(),
        )
    })?;

    let reset_link = format!(
        "{}/reset-password/{token}",
        ctx.config.frontend_url.trim_end_matches('/')
    );

    ctx.mailer
        .send_password_reset(&user.email, display_name(&user), &reset_link)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, email = %user.email, "unable to send reset email");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to send email, please try again later".to_string(),
            )
        })?;

    tracing::info!(email = %user.email, "password reset email sent");

    Ok(Json(MessageResponse::new(
        "if an account with that email exists, a password reset link has been sent",
    )))
}
