use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::reset::{decode_reset_token, validate_reset_token};
use keja_db_client::users::get_user::get_user;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::context::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateResetResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Link pre-check used by the frontend before showing the reset form
#[utoipa::path(
        get,
        tag = "password-reset",
        operation_id = "validate_reset_token",
        path = "/password-reset/validate/{token}",
        params(
            ("token" = String, Path, description = "signed reset token")
        ),
        responses(
            (status = 200, body = ValidateResetResponse),
            (status = 400, body = ValidateResetResponse),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, token))]
pub async fn validate_reset_handler(
    State(ctx): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ValidateResetResponse>, (StatusCode, Json<ValidateResetResponse>)> {
    let rejected = |error: &str| {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidateResetResponse {
                valid: false,
                email: None,
                error: Some(error.to_string()),
            }),
        )
    };

    let claims =
        decode_reset_token(&ctx.jwt, &token).map_err(|_| rejected("invalid reset link"))?;

    let user = get_user(&ctx.db, claims.sub)
        .await
        .ok()
        .flatten()
        .ok_or_else(|| rejected("invalid reset link"))?;

    validate_reset_token(&ctx.jwt, &token, &user.password_hash)
        .map_err(|_| rejected("invalid or expired reset link"))?;

    Ok(Json(ValidateResetResponse {
        valid: true,
        email: Some(user.email),
        error: None,
    }))
}
