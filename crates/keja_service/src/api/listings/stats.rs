use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::listings::stats::listing_stats;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::{fetch_listing, require_owner};

#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryStats {
    pub total: i64,
    pub last_7_days: i64,
    pub last_30_days: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingStatsResponse {
    pub views: i64,
    pub favorites: i64,
    pub inquiries: InquiryStats,
}

/// Engagement statistics, owner only
#[utoipa::path(
        get,
        tag = "listings",
        operation_id = "listing_stats",
        path = "/listings/{key}/stats",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        responses(
            (status = 200, body = ListingStatsResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn listing_stats_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(key): Path<String>,
) -> Result<Json<ListingStatsResponse>, (StatusCode, String)> {
    let listing = fetch_listing(&ctx.db, &key).await?;
    require_owner(&listing, &user)?;

    let stats = listing_stats(&ctx.db, listing.id).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to load listing stats");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to load listing stats".to_string(),
        )
    })?;

    Ok(Json(ListingStatsResponse {
        views: stats.views,
        favorites: stats.favorites,
        inquiries: InquiryStats {
            total: stats.inquiries_total,
            last_7_days: stats.inquiries_last_7_days,
            last_30_days: stats.inquiries_last_30_days,
        },
    }))
}
