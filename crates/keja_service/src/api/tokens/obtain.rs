use axum::{extract::State, http::StatusCode, Json};
use keja_auth::password::verify_password;
use keja_db_client::users::get_user::get_user_by_login;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::context::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ObtainTokenRequest {
    /// Username or email address
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

/// Bearer token issuance. A single generic 401 covers unknown accounts,
/// wrong passwords and deactivated accounts alike.
#[utoipa::path(
        post,
        tag = "tokens",
        operation_id = "obtain_token",
        path = "/token",
        request_body = ObtainTokenRequest,
        responses(
            (status = 200, body = TokenPairResponse),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn obtain_token_handler(
    State(ctx): State<AppState>,
    Json(req): Json<ObtainTokenRequest>,
) -> Result<Json<TokenPairResponse>, (StatusCode, String)> {
    let invalid = (
        StatusCode::UNAUTHORIZED,
        "no active account found with the given credentials".to_string(),
    );

    let user = get_user_by_login(&ctx.db, &req.username)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to look up account");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to log in".to_string(),
            )
        })?
        .ok_or_else(|| invalid.clone())?;

    if !user.is_active || !verify_password(&req.password, &user.password_hash) {
        return Err(invalid);
    }

    let pair = ctx.jwt.issue_pair(&user).map_err(|e| {
        tracing::error!(error = ?e, "unable to issue tokens");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to log in".to_string(),
        )
    })?;

    Ok(Json(TokenPairResponse {
        access: pair.access,
        refresh: pair.refresh,
    }))
}
