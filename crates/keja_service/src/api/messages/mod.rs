use axum::{
    routing::{get, post},
    Router,
};

use crate::api::context::AppState;

pub mod create;
pub mod list;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_messages_handler))
        .route("/", post(create::create_message_handler))
}
