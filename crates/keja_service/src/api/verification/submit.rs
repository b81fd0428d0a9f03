use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::verification::upsert_document::upsert_document;
use model::verification::VerificationDocumentView;

use crate::api::context::AppState;
use crate::utils::media::save_upload;

/// Uploads (or replaces) the caller's identity document. Re-submission
/// overwrites the previous file and puts the document back in the review
/// queue.
#[utoipa::path(
        post,
        tag = "verification",
        operation_id = "submit_verification_document",
        path = "/verification",
        responses(
            (status = 200, body = VerificationDocumentView),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, multipart))]
pub async fn submit_document_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<VerificationDocumentView>, (StatusCode, String)> {
    let mut stored_path = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!(error = ?e, "unable to read multipart field");
        (
            StatusCode::BAD_REQUEST,
            "unable to read multipart body".to_string(),
        )
    })? {
        if field.name() != Some("id_document") {
            continue;
        }

        let file_name = field.file_name().map(|name| name.to_string());
        let bytes = field.bytes().await.map_err(|e| {
            tracing::error!(error = ?e, "unable to read upload bytes");
            (
                StatusCode::BAD_REQUEST,
                "unable to read upload bytes".to_string(),
            )
        })?;

        let file_path = save_upload(
            &ctx.config.media_root,
            "verification_docs",
            file_name.as_deref(),
            &bytes,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to store document");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to store document".to_string(),
            )
        })?;

        stored_path = Some(file_path);
    }

    let Some(file_path) = stored_path else {
        return Err((
            StatusCode::BAD_REQUEST,
            "id_document file is required".to_string(),
        ));
    };

    let document = upsert_document(&ctx.db, user.id, &file_path)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to save verification document");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to save verification document".to_string(),
            )
        })?;

    Ok(Json(VerificationDocumentView::from(document)))
}
