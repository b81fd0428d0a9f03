use axum::{
    routing::{get, post},
    Router,
};

use crate::api::context::AppState;

pub mod list;
pub mod submit;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit::submit_document_handler))
        .route("/", get(list::list_documents_handler))
}
