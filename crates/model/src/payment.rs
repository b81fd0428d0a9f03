use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Verification,
    ListingUpload,
    Promotion,
    ContactAccess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// A settled gateway transaction. Rows are written once, on successful
/// verification; the unique external reference deduplicates repeat verifies.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Payment {
    pub id: i64,
    pub user_id: i64,
    pub listing_id: Option<i64>,
    pub payment_type: PaymentType,
    /// Whole KES
    pub amount: i64,
    pub status: PaymentStatus,
    pub reference: String,
    pub method: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Payment row joined with account and listing labels for list views
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PaymentWithContext {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub listing_id: Option<i64>,
    pub listing_title: Option<String>,
    pub payment_type: PaymentType,
    pub amount: i64,
    pub status: PaymentStatus,
    pub reference: String,
    pub method: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}
