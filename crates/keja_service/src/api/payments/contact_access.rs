use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use model::payment::PaymentType;
use paystack_client::metadata::PaymentMetadata;
use paystack_client::phone::format_msisdn;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::payments::{billing_email, gateway_error, load_account, plain_error, PaymentError};
use crate::constants::CONTACT_ACCESS_FEE_KES;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactAccessRequest {
    pub phone: Option<String>,
    pub listing_id: Option<i64>,
}

/// Starts the contact-unlock purchase for a hunter. The entitlement granted
/// on verification is account-wide; the listing id only records what
/// prompted the purchase.
#[utoipa::path(
        post,
        tag = "payments",
        operation_id = "contact_access_payment",
        path = "/payments/contact_access",
        request_body = ContactAccessRequest,
        responses(
            (status = 200, description = "gateway session data"),
            (status = 400, description = "validation failure or gateway decline"),
            (status = 401, body = String),
            (status = 500, description = "gateway unreachable"),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn contact_access_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<ContactAccessRequest>,
) -> Result<Json<serde_json::Value>, PaymentError> {
    let Some(phone) = req.phone else {
        return Err(plain_error(
            StatusCode::BAD_REQUEST,
            "phone number is required",
        ));
    };
    let Some(listing_id) = req.listing_id else {
        return Err(plain_error(
            StatusCode::BAD_REQUEST,
            "listing id is required",
        ));
    };

    let msisdn =
        format_msisdn(&phone).map_err(|e| plain_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let account = load_account(&ctx.db, user.id).await?;
    let email = billing_email(&account);
    let metadata = PaymentMetadata::new(user.id, PaymentType::ContactAccess).listing(listing_id);

    let charge = ctx
        .paystack
        .charge_mobile_money(&email, CONTACT_ACCESS_FEE_KES * 100, &msisdn, &metadata)
        .await
        .map_err(gateway_error)?;

    let data = serde_json::to_value(charge).map_err(|e| {
        tracing::error!(error = ?e, "unable to serialize gateway response");
        plain_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to serialize gateway response",
        )
    })?;

    Ok(Json(data))
}
