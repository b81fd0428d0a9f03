use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use keja_auth::Staff;
use keja_db_client::listings::counts::recent_listings;
use keja_db_client::payments::list_payments::recent_payments;
use keja_db_client::users::list_users::recent_users;
use model::payment::{PaymentStatus, PaymentType};
use model::user::UserRole;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::context::AppState;

const RECENT_LIMIT: i64 = 5;

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentUser {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentListingEntry {
    pub id: i64,
    pub title: String,
    pub owner: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentPayment {
    pub id: i64,
    pub user: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentActivitiesResponse {
    pub users: Vec<RecentUser>,
    pub listings: Vec<RecentListingEntry>,
    pub payments: Vec<RecentPayment>,
}

#[utoipa::path(
        get,
        tag = "admin",
        operation_id = "admin_recent_activities",
        path = "/admin/recent_activities",
        responses(
            (status = 200, body = RecentActivitiesResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn recent_activities_handler(
    State(ctx): State<AppState>,
    Staff(_user): Staff,
) -> Result<Json<RecentActivitiesResponse>, (StatusCode, String)> {
    let internal = |e: anyhow::Error| {
        tracing::error!(error = ?e, "unable to load recent activities");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to load recent activities".to_string(),
        )
    };

    let users = recent_users(&ctx.db, RECENT_LIMIT).await.map_err(internal)?;
    let listings = recent_listings(&ctx.db, RECENT_LIMIT)
        .await
        .map_err(internal)?;
    let payments = recent_payments(&ctx.db, RECENT_LIMIT)
        .await
        .map_err(internal)?;

    Ok(Json(RecentActivitiesResponse {
        users: users
            .into_iter()
            .map(|u| RecentUser {
                id: u.id,
                username: u.username,
                full_name: u.full_name,
                role: u.role,
                created_at: u.created_at,
            })
            .collect(),
        listings: listings
            .into_iter()
            .map(|l| RecentListingEntry {
                id: l.id,
                title: l.title,
                owner: l.owner_name,
                owner_name: l.owner_full_name,
                created_at: l.created_at,
            })
            .collect(),
        payments: payments
            .into_iter()
            .map(|p| RecentPayment {
                id: p.id,
                user: p.user_name,
                amount: p.amount,
                payment_type: p.payment_type,
                status: p.status,
                created_at: p.created_at,
            })
            .collect(),
    }))
}
