use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::Staff;
use keja_db_client::verification::review_document::review_document;
use model::verification::{DocumentStatus, VerificationDocumentView};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewVerificationRequest {
    pub status: DocumentStatus,
    #[serde(default)]
    pub reason: String,
}

/// Operator decision on an identity document. Approval cascades to the
/// account's verified flag; this is the only path that flips it as part of
/// the verification flow.
#[utoipa::path(
        post,
        tag = "admin",
        operation_id = "admin_review_verification",
        path = "/admin/verification/{id}/review",
        params(
            ("id" = i64, Path, description = "verification document id")
        ),
        request_body = ReviewVerificationRequest,
        responses(
            (status = 200, body = VerificationDocumentView),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn review_verification_handler(
    State(ctx): State<AppState>,
    Staff(_user): Staff,
    Path(id): Path<i64>,
    Json(req): Json<ReviewVerificationRequest>,
) -> Result<Json<VerificationDocumentView>, (StatusCode, String)> {
    if req.status == DocumentStatus::Pending {
        return Err((StatusCode::BAD_REQUEST, "invalid status".to_string()));
    }

    let document = review_document(&ctx.db, id, req.status, &req.reason)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to review document");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to review document".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "document not found".to_string()))?;

    Ok(Json(VerificationDocumentView::from(document)))
}
