use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::Staff;
use keja_db_client::users::create_user::{create_user, login_exists, CreateUserOptions};
use keja_db_client::users::list_users::list_users;
use keja_db_client::users::update_user::{mark_verified, toggle_active};
use model::response::MessageResponse;
use model::user::{UserProfile, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::context::AppState;

#[utoipa::path(
        get,
        tag = "admin",
        operation_id = "admin_all_users",
        path = "/admin/users",
        responses(
            (status = 200, body = Vec<UserProfile>),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn all_users_handler(
    State(ctx): State<AppState>,
    Staff(_user): Staff,
) -> Result<Json<Vec<UserProfile>>, (StatusCode, String)> {
    let users = list_users(&ctx.db).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to list users");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to list users".to_string(),
        )
    })?;

    Ok(Json(users.into_iter().map(UserProfile::from).collect()))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminCreateUserRequest {
    pub username: Option<String>,
    pub email: String,
    pub password: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_role", alias = "user_type")]
    pub role: UserRole,
    /// Operators may seed verified or staff accounts directly
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_staff: bool,
}

fn default_role() -> UserRole {
    UserRole::Hunter
}

#[utoipa::path(
        post,
        tag = "admin",
        operation_id = "admin_create_user",
        path = "/admin/users",
        request_body = AdminCreateUserRequest,
        responses(
            (status = 201, body = UserProfile),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn create_user_handler(
    State(ctx): State<AppState>,
    Staff(_user): Staff,
    Json(req): Json<AdminCreateUserRequest>,
) -> Result<(StatusCode, Json<UserProfile>), (StatusCode, String)> {
    if req.email.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "email is required".to_string()));
    }

    let email = req.email.trim().to_string();
    let username = req
        .username
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| email.clone());

    let taken = login_exists(&ctx.db, &username, &email).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to check login availability");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to create account".to_string(),
        )
    })?;
    if taken {
        return Err((
            StatusCode::BAD_REQUEST,
            "an account with this username or email already exists".to_string(),
        ));
    }

    let password_hash = match &req.password {
        Some(password) => keja_auth::password::hash_password(password).map_err(|e| {
            tracing::error!(error = ?e, "unable to hash password");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to create account".to_string(),
            )
        })?,
        None => keja_auth::password::UNUSABLE_PASSWORD.to_string(),
    };

    let user = create_user(
        &ctx.db,
        CreateUserOptions {
            username,
            email,
            password_hash,
            full_name: req.full_name,
            phone: req.phone,
            role: req.role,
            is_staff: req.is_staff,
            is_verified: req.is_verified,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to create user");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to create account".to_string(),
        )
    })?;

    Ok((StatusCode::CREATED, Json(UserProfile::from(user))))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleActiveResponse {
    pub status: String,
    pub is_active: bool,
}

#[utoipa::path(
        post,
        tag = "admin",
        operation_id = "admin_toggle_user_active",
        path = "/admin/users/{id}/toggle_active",
        params(
            ("id" = i64, Path, description = "user id")
        ),
        responses(
            (status = 200, body = ToggleActiveResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn toggle_active_handler(
    State(ctx): State<AppState>,
    Staff(_user): Staff,
    Path(id): Path<i64>,
) -> Result<Json<ToggleActiveResponse>, (StatusCode, String)> {
    let is_active = toggle_active(&ctx.db, id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to toggle account");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to toggle account".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "account not found".to_string()))?;

    Ok(Json(ToggleActiveResponse {
        status: "updated".to_string(),
        is_active,
    }))
}

/// Manual verification without a document review
#[utoipa::path(
        post,
        tag = "admin",
        operation_id = "admin_verify_user",
        path = "/admin/users/{id}/verify",
        params(
            ("id" = i64, Path, description = "user id")
        ),
        responses(
            (status = 200, body = MessageResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn verify_user_handler(
    State(ctx): State<AppState>,
    Staff(_user): Staff,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let updated = mark_verified(&ctx.db, id).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to verify account");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to verify account".to_string(),
        )
    })?;

    if !updated {
        return Err((StatusCode::NOT_FOUND, "account not found".to_string()));
    }

    Ok(Json(MessageResponse::new("verified")))
}
