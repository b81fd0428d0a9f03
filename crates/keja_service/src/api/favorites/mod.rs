use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::api::context::AppState;

pub mod create;
pub mod delete_favorite;
pub mod list;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_favorites_handler))
        .route("/", post(create::create_favorite_handler))
        .route("/:id", delete(delete_favorite::delete_favorite_handler))
}
