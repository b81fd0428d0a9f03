use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use model::inquiry::InquiryRecord;
use sqlx::PgPool;

use crate::api::context::AppState;

pub mod create;
pub mod list;
pub mod mark_read;
pub mod reply;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_inquiries_handler))
        .route("/", post(create::create_inquiry_handler))
        .route("/:id/reply", post(reply::reply_handler))
        .route("/:id/mark_read", post(mark_read::mark_read_handler))
}

pub(crate) async fn fetch_inquiry(
    db: &PgPool,
    id: i64,
) -> Result<InquiryRecord, (StatusCode, String)> {
    keja_db_client::inquiries::get_inquiry::get_inquiry(db, id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to get inquiry");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to get inquiry".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "inquiry not found".to_string()))
}
