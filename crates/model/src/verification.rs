use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "document_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

/// Identity document row, one per account. Re-uploading overwrites the file
/// and resets the review state.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VerificationDocument {
    pub id: i64,
    pub user_id: i64,
    pub file_path: String,
    pub status: DocumentStatus,
    pub rejection_reason: String,
    pub uploaded_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerificationDocumentView {
    pub id: i64,
    pub user_id: i64,
    pub document_url: String,
    pub status: DocumentStatus,
    pub rejection_reason: String,
    pub uploaded_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl From<VerificationDocument> for VerificationDocumentView {
    fn from(doc: VerificationDocument) -> Self {
        Self {
            id: doc.id,
            user_id: doc.user_id,
            document_url: crate::listing::media_url(&doc.file_path),
            status: doc.status,
            rejection_reason: doc.rejection_reason,
            uploaded_at: doc.uploaded_at,
            reviewed_at: doc.reviewed_at,
        }
    }
}
