use axum::{extract::State, http::StatusCode, Json};
use keja_auth::claims::TokenKind;
use keja_db_client::users::get_user::get_user;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::context::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenResponse {
    pub access: String,
}

/// Mints a fresh access token from a refresh token. The account is reloaded
/// so deactivation takes effect at the next refresh at the latest.
#[utoipa::path(
        post,
        tag = "tokens",
        operation_id = "refresh_token",
        path = "/token/refresh",
        request_body = RefreshTokenRequest,
        responses(
            (status = 200, body = AccessTokenResponse),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn refresh_token_handler(
    State(ctx): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<Json<AccessTokenResponse>, (StatusCode, String)> {
    let claims = ctx
        .jwt
        .validate(&req.refresh, TokenKind::Refresh)
        .map_err(|e| {
            tracing::trace!(error = %e, "refresh token rejected");
            (StatusCode::UNAUTHORIZED, e.to_string())
        })?;

    let user = get_user(&ctx.db, claims.sub)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to load account");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to refresh token".to_string(),
            )
        })?
        .filter(|user| user.is_active)
        .ok_or((
            StatusCode::UNAUTHORIZED,
            "no active account found for this token".to_string(),
        ))?;

    let access = ctx.jwt.issue(&user, TokenKind::Access).map_err(|e| {
        tracing::error!(error = ?e, "unable to issue access token");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to refresh token".to_string(),
        )
    })?;

    Ok(Json(AccessTokenResponse { access }))
}
