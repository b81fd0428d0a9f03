use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use model::user::User;
use paystack_client::error::PaystackClientError;
use serde_json::json;
use sqlx::PgPool;

use crate::api::context::AppState;

pub mod contact_access;
pub mod initiate;
pub mod list;
pub mod verify;
pub mod verify_account;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_payments_handler))
        .route("/initiate", post(initiate::initiate_payment_handler))
        .route(
            "/verify_account",
            post(verify_account::verify_account_handler),
        )
        .route(
            "/contact_access",
            post(contact_access::contact_access_handler),
        )
        .route("/verify", post(verify::verify_payment_handler))
}

/// Payment endpoints answer with JSON error bodies so the provider's
/// diagnostic payload can ride along.
pub(crate) type PaymentError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn plain_error(status: StatusCode, message: impl Into<String>) -> PaymentError {
    (status, Json(json!({ "error": message.into() })))
}

/// Declines are 4xx with the raw provider payload attached; transport and
/// shape problems are 5xx.
pub(crate) fn gateway_error(e: PaystackClientError) -> PaymentError {
    match e {
        PaystackClientError::Declined { message, details } => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": message, "details": details })),
        ),
        PaystackClientError::Transport { details } | PaystackClientError::Unexpected { details } => {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": details })),
            )
        }
    }
}

pub(crate) async fn load_account(db: &PgPool, user_id: i64) -> Result<User, PaymentError> {
    keja_db_client::users::get_user::get_user(db, user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to load account");
            plain_error(StatusCode::INTERNAL_SERVER_ERROR, "unable to load account")
        })?
        .ok_or_else(|| plain_error(StatusCode::NOT_FOUND, "account not found"))
}

/// Paystack requires an email on every charge; accounts without one get a
/// synthetic address
pub(crate) fn billing_email(user: &User) -> String {
    if user.email.is_empty() {
        format!("user-{}@kejahunt.co.ke", user.id)
    } else {
        user.email.clone()
    }
}
