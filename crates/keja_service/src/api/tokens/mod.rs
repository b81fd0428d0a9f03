use axum::{routing::post, Router};

use crate::api::context::AppState;

pub mod obtain;
pub mod refresh;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(obtain::obtain_token_handler))
        .route("/refresh", post(refresh::refresh_token_handler))
}
