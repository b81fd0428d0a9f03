use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use model::user::User;
use sqlx::PgPool;

use crate::api::context::AppState;

pub mod me;
pub mod register;
pub mod set_password;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register::register_handler))
        .route(
            "/me",
            get(me::get_me_handler)
                .patch(me::update_me_handler)
                .put(me::update_me_handler),
        )
        .route("/set_password", post(set_password::set_password_handler))
}

pub(crate) async fn current_user(
    db: &PgPool,
    user_id: i64,
) -> Result<User, (StatusCode, String)> {
    keja_db_client::users::get_user::get_user(db, user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to load account");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to load account".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "account not found".to_string()))
}

/// Preferred display name for emails and greetings
pub(crate) fn display_name(user: &User) -> &str {
    if user.full_name.is_empty() {
        &user.username
    } else {
        &user.full_name
    }
}
