use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use keja_db_client::listings::create_listing::{create_listing, CreateListingOptions};
use model::listing::{ListingResponse, ListingStatus};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::view::listing_response;
use crate::utils::map_embed::extract_coords;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub rent_per_month: i64,
    #[serde(default)]
    pub deposit: i64,
    pub location: String,
    #[serde(default)]
    pub contact_phone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub map_embed: String,
}

/// Creates a listing for the caller. New listings go live immediately; the
/// slug is derived from the title once and kept stable after that.
#[utoipa::path(
        post,
        tag = "listings",
        operation_id = "create_listing",
        path = "/listings",
        request_body = CreateListingRequest,
        responses(
            (status = 201, body = ListingResponse),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn create_listing_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), (StatusCode, String)> {
    if req.title.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "title is required".to_string()));
    }
    if req.bedrooms < 0 || req.bathrooms < 0 || req.rent_per_month < 0 || req.deposit < 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "counts and amounts must not be negative".to_string(),
        ));
    }

    // When the caller pasted a map embed but no coordinates, derive them
    // from the embed markers.
    let (mut latitude, mut longitude) = (req.latitude, req.longitude);
    if !req.map_embed.is_empty() && (latitude.is_none() || longitude.is_none()) {
        if let Some((lat, lng)) = extract_coords(&req.map_embed) {
            latitude = Some(lat);
            longitude = Some(lng);
        }
    }

    let record = create_listing(
        &ctx.db,
        CreateListingOptions {
            owner_id: user.id,
            title: req.title,
            description: req.description,
            property_type: req.property_type,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            rent_per_month: req.rent_per_month,
            deposit: req.deposit,
            location: req.location,
            contact_phone: req.contact_phone,
            latitude,
            longitude,
            amenities: req.amenities,
            map_embed: req.map_embed,
            status: ListingStatus::Active,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to create listing");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to create listing".to_string(),
        )
    })?;

    let listing = listing_response(&ctx.db, record, Some(&user))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to assemble listing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to assemble listing".to_string(),
            )
        })?;

    Ok((StatusCode::CREATED, Json(listing)))
}
