use axum::{extract::State, http::StatusCode, Json};
use keja_auth::Staff;
use keja_db_client::listings::counts::listing_counts;
use keja_db_client::payments::revenue::revenue;
use keja_db_client::users::counts::user_counts;
use keja_db_client::verification::list_documents::count_pending;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::context::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserStats {
    pub total: i64,
    pub landlords: i64,
    pub hunters: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingStats {
    pub total: i64,
    pub published: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueStats {
    pub total: i64,
    pub month: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerificationStats {
    pub pending: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatsResponse {
    pub users: UserStats,
    pub listings: ListingStats,
    pub revenue: RevenueStats,
    pub verifications: VerificationStats,
}

/// Marketplace-wide dashboard numbers
#[utoipa::path(
        get,
        tag = "admin",
        operation_id = "admin_stats",
        path = "/admin/stats",
        responses(
            (status = 200, body = AdminStatsResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn admin_stats_handler(
    State(ctx): State<AppState>,
    Staff(_user): Staff,
) -> Result<Json<AdminStatsResponse>, (StatusCode, String)> {
    let internal = |e: anyhow::Error| {
        tracing::error!(error = ?e, "unable to aggregate admin stats");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to aggregate admin stats".to_string(),
        )
    };

    let users = user_counts(&ctx.db).await.map_err(internal)?;
    let listings = listing_counts(&ctx.db).await.map_err(internal)?;
    let revenue = revenue(&ctx.db).await.map_err(internal)?;
    let pending = count_pending(&ctx.db).await.map_err(internal)?;

    Ok(Json(AdminStatsResponse {
        users: UserStats {
            total: users.total,
            landlords: users.landlords,
            hunters: users.hunters,
        },
        listings: ListingStats {
            total: listings.total,
            published: listings.published,
        },
        revenue: RevenueStats {
            total: revenue.total,
            month: revenue.this_month,
        },
        verifications: VerificationStats { pending },
    }))
}
