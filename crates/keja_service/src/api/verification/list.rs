use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use keja_db_client::verification::{get_document, list_documents};
use model::verification::VerificationDocumentView;

use crate::api::context::AppState;

/// Staff see the whole review queue; everyone else sees at most their own
/// document
#[utoipa::path(
        get,
        tag = "verification",
        operation_id = "list_verification_documents",
        path = "/verification",
        responses(
            (status = 200, body = Vec<VerificationDocumentView>),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn list_documents_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<VerificationDocumentView>>, (StatusCode, String)> {
    let documents = if user.is_staff {
        list_documents::list_documents(&ctx.db).await
    } else {
        get_document::get_document_for_user(&ctx.db, user.id)
            .await
            .map(|doc| doc.into_iter().collect())
    }
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to list verification documents");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to list verification documents".to_string(),
        )
    })?;

    Ok(Json(
        documents
            .into_iter()
            .map(VerificationDocumentView::from)
            .collect(),
    ))
}
