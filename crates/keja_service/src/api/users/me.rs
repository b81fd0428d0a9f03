use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use keja_db_client::users::update_user::{update_profile, UpdateProfileOptions};
use model::user::{UserProfile, UserRole};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::users::current_user;

#[utoipa::path(
        get,
        tag = "users",
        operation_id = "get_me",
        path = "/users/me",
        responses(
            (status = 200, body = UserProfile),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_me_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    let account = current_user(&ctx.db, user.id).await?;
    Ok(Json(UserProfile::from(account)))
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMeRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub full_name: Option<String>,
    #[serde(alias = "user_type")]
    pub role: Option<UserRole>,
}

#[utoipa::path(
        patch,
        tag = "users",
        operation_id = "update_me",
        path = "/users/me",
        request_body = UpdateMeRequest,
        responses(
            (status = 200, body = UserProfile),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn update_me_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdateMeRequest>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    let updated = update_profile(
        &ctx.db,
        user.id,
        UpdateProfileOptions {
            username: req.username,
            email: req.email,
            phone: req.phone,
            full_name: req.full_name,
            role: req.role,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to update profile");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to update profile".to_string(),
        )
    })?
    .ok_or((StatusCode::NOT_FOUND, "account not found".to_string()))?;

    Ok(Json(UserProfile::from(updated)))
}
