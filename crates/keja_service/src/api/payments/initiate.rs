use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use model::payment::PaymentType;
use paystack_client::metadata::PaymentMetadata;
use paystack_client::phone::format_msisdn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::payments::{billing_email, gateway_error, load_account, plain_error, PaymentError};

#[derive(Debug, Deserialize, ToSchema)]
pub struct InitiatePaymentRequest {
    /// Whole KES
    pub amount: i64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub listing_id: Option<i64>,
    /// M-Pesa number, required for the direct charge flow
    pub phone: Option<String>,
    /// Billing email override; defaults to the account email
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InitiatePaymentResponse {
    pub reference: String,
    pub status: Option<String>,
    pub message: String,
}

/// Fires an M-Pesa push for an arbitrary purchase. The phone number is
/// normalized and validated before any network call.
#[utoipa::path(
        post,
        tag = "payments",
        operation_id = "initiate_payment",
        path = "/payments/initiate",
        request_body = InitiatePaymentRequest,
        responses(
            (status = 200, body = InitiatePaymentResponse),
            (status = 400, description = "validation failure or gateway decline"),
            (status = 401, body = String),
            (status = 500, description = "gateway unreachable"),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn initiate_payment_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<InitiatePaymentRequest>,
) -> Result<Json<InitiatePaymentResponse>, PaymentError> {
    if req.amount <= 0 {
        return Err(plain_error(StatusCode::BAD_REQUEST, "amount is required"));
    }
    let Some(phone) = req.phone else {
        return Err(plain_error(
            StatusCode::BAD_REQUEST,
            "phone number is required for M-Pesa payment",
        ));
    };
    let msisdn =
        format_msisdn(&phone).map_err(|e| plain_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let account = load_account(&ctx.db, user.id).await?;
    let email = req.email.unwrap_or_else(|| billing_email(&account));

    let mut metadata = PaymentMetadata::new(user.id, req.payment_type);
    if let Some(listing_id) = req.listing_id {
        metadata = metadata.listing(listing_id);
    }

    let charge = ctx
        .paystack
        .charge_mobile_money(&email, req.amount * 100, &msisdn, &metadata)
        .await
        .map_err(gateway_error)?;

    Ok(Json(InitiatePaymentResponse {
        reference: charge.reference,
        status: charge.status,
        message: "payment initiated successfully".to_string(),
    }))
}
