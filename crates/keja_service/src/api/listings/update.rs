use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::listings::update_listing::{update_listing, UpdateListingOptions};
use model::listing::{ListingResponse, ListingStatus};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::view::listing_response;
use crate::api::listings::{fetch_listing, require_owner};
use crate::utils::map_embed::extract_coords;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub rent_per_month: Option<i64>,
    pub deposit: Option<i64>,
    pub location: Option<String>,
    pub contact_phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub map_embed: Option<String>,
    pub status: Option<ListingStatus>,
}

/// Partial update by the owner; absent fields are left alone
#[utoipa::path(
        patch,
        tag = "listings",
        operation_id = "update_listing",
        path = "/listings/{key}",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        request_body = UpdateListingRequest,
        responses(
            (status = 200, body = ListingResponse),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn update_listing_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(key): Path<String>,
    Json(mut req): Json<UpdateListingRequest>,
) -> Result<Json<ListingResponse>, (StatusCode, String)> {
    let existing = fetch_listing(&ctx.db, &key).await?;
    require_owner(&existing, &user)?;

    // Same embed-coordinate backfill as creation, applied to the incoming
    // fields only.
    if let Some(map_embed) = &req.map_embed {
        if req.latitude.is_none() || req.longitude.is_none() {
            if let Some((lat, lng)) = extract_coords(map_embed) {
                req.latitude = Some(lat);
                req.longitude = Some(lng);
            }
        }
    }

    let record = update_listing(
        &ctx.db,
        existing.id,
        UpdateListingOptions {
            title: req.title,
            description: req.description,
            property_type: req.property_type,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            rent_per_month: req.rent_per_month,
            deposit: req.deposit,
            location: req.location,
            contact_phone: req.contact_phone,
            latitude: req.latitude,
            longitude: req.longitude,
            amenities: req.amenities,
            map_embed: req.map_embed,
            status: req.status,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to update listing");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to update listing".to_string(),
        )
    })?
    .ok_or((StatusCode::NOT_FOUND, "listing not found".to_string()))?;

    let listing = listing_response(&ctx.db, record, Some(&user))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to assemble listing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to assemble listing".to_string(),
            )
        })?;

    Ok(Json(listing))
}
