use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use keja_db_client::inquiries::create_inquiry::{create_inquiry, CreateInquiryOptions};
use keja_db_client::listings::get_listing::get_listing;
use model::inquiry::InquiryResponse;
use model::listing::ListingKey;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInquiryRequest {
    pub listing_id: i64,
    pub message: String,
    #[serde(default)]
    pub contact_phone: String,
}

#[utoipa::path(
        post,
        tag = "inquiries",
        operation_id = "create_inquiry",
        path = "/inquiries",
        request_body = CreateInquiryRequest,
        responses(
            (status = 201, body = InquiryResponse),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn create_inquiry_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateInquiryRequest>,
) -> Result<(StatusCode, Json<InquiryResponse>), (StatusCode, String)> {
    if req.message.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "message is required".to_string()));
    }

    let listing = get_listing(&ctx.db, &ListingKey::Id(req.listing_id))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to get listing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to create inquiry".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "listing not found".to_string()))?;

    let record = create_inquiry(
        &ctx.db,
        CreateInquiryOptions {
            listing_id: listing.id,
            user_id: user.id,
            message: req.message,
            contact_phone: req.contact_phone,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to create inquiry");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to create inquiry".to_string(),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(InquiryResponse::assemble(record, Vec::new())),
    ))
}
