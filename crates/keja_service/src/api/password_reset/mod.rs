use axum::{
    routing::{get, post},
    Router,
};

use crate::api::context::AppState;

pub mod confirm;
pub mod request;
pub mod validate;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request", post(request::request_reset_handler))
        .route("/confirm", post(confirm::confirm_reset_handler))
        .route("/validate/:token", get(validate::validate_reset_handler))
}
