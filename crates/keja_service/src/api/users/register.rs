use axum::{extract::State, http::StatusCode, Json};
use keja_db_client::users::create_user::{create_user, login_exists, CreateUserOptions};
use model::user::{UserProfile, UserRole};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::users::display_name;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Defaults to the email address when not provided
    pub username: Option<String>,
    pub email: String,
    /// Optional; accounts created without one cannot log in with a password
    pub password: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_role", alias = "user_type")]
    pub role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::Hunter
}

/// Registration. The welcome email goes out on a detached task: a failed
/// send is logged and never fails account creation.
#[utoipa::path(
        post,
        tag = "users",
        operation_id = "register",
        path = "/users",
        request_body = RegisterRequest,
        responses(
            (status = 201, body = UserProfile),
            (status = 400, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn register_handler(
    State(ctx): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserProfile>), (StatusCode, String)> {
    if req.email.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "email is required".to_string()));
    }
    if let Some(password) = &req.password {
        if password.len() < 6 {
            return Err((
                StatusCode::BAD_REQUEST,
                "password must be at least 6 characters long".to_string(),
            ));
        }
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
            is_staff: false,
            is_verified: false,
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

    if !user.email.is_empty() {
        let mailer = ctx.mailer.clone();
        let site_url = ctx.config.frontend_url.clone();
        let to_email = user.email.clone();
        let name = display_name(&user).to_string();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_welcome(&to_email, &name, &site_url).await {
                tracing::error!(error = ?e, %to_email, "unable to send welcome email");
            }
        });
    }

    Ok((StatusCode::CREATED, Json(UserProfile::from(user))))
}
