use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Duration, Utc};
use keja_auth::AuthUser;
use keja_db_client::listings::promote_listing::promote_listing;
use keja_db_client::payments::create_payment::{
    record_completed_payment, CompletedPaymentOptions,
};
use model::payment::PaymentType;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::payments::{gateway_error, plain_error, PaymentError};
use crate::constants::DEFAULT_PROMOTION_DAYS;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyPaymentRequest {
    pub reference: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyPaymentResponse {
    pub status: String,
    pub payment_type: PaymentType,
    pub promoted_until: Option<DateTime<Utc>>,
}

/// Polls the gateway for a transaction's outcome and applies the purchase.
///
/// On a confirmed success the purchase type from the initiation metadata
/// decides the effect: promotion resets the listing's expiry from now,
/// contact access leaves entitlement to be re-derived from payment rows, and
/// verification is deliberately a no-op because the verified flag is gated
/// on manual document review. The Payment row is written only once per
/// external reference, so repeat calls are safe no-ops.
#[utoipa::path(
        post,
        tag = "payments",
        operation_id = "verify_payment",
        path = "/payments/verify",
        request_body = VerifyPaymentRequest,
        responses(
            (status = 200, body = VerifyPaymentResponse),
            (status = 400, description = "unconfirmed transaction with provider payload"),
            (status = 401, body = String),
            (status = 404, body = String),
            (status = 500, description = "gateway unreachable"),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn verify_payment_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<VerifyPaymentRequest>,
) -> Result<Json<VerifyPaymentResponse>, PaymentError> {
    if req.reference.is_empty() {
        return Err(plain_error(StatusCode::BAD_REQUEST, "no reference provided"));
    }

    let transaction = ctx
        .paystack
        .verify_transaction(&req.reference)
        .await
        .map_err(gateway_error)?;

    // "Not success" covers both still-pending and permanently-failed; the
    // gateway response attached below is all the caller gets to tell them
    // apart.
    if !transaction.is_success() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "payment verification failed",
                "details": transaction,
            })),
        ));
    }

    let Some(metadata) = transaction.metadata.clone() else {
        return Err(plain_error(
            StatusCode::BAD_REQUEST,
            "transaction metadata missing",
        ));
    };

    let mut promoted_until = None;
    let mut status = "verified";

    match metadata.purchase {
        PaymentType::Promotion => {
            let Some(listing_id) = metadata.listing_id else {
                return Err(plain_error(
                    StatusCode::BAD_REQUEST,
                    "promotion transaction carries no listing",
                ));
            };
            let duration = metadata.duration_days.unwrap_or(DEFAULT_PROMOTION_DAYS);
            let until = Utc::now() + Duration::days(duration);

            promoted_until = Some(
                promote_listing(&ctx.db, listing_id, user.id, until)
                    .await
                    .map_err(|e| {
                        tracing::error!(error = ?e, "unable to promote listing");
                        plain_error(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "unable to promote listing",
                        )
                    })?
                    .ok_or_else(|| plain_error(StatusCode::NOT_FOUND, "listing not found"))?,
            );
            status = "promoted";
        }
        // Entitlement is derived from completed payment rows on demand
        PaymentType::ContactAccess => {}
        // Deliberately not auto-verifying: the verified flag is set only
        // when an operator approves the identity document
        PaymentType::Verification => {}
        PaymentType::ListingUpload => {}
    }

    let recorded = record_completed_payment(
        &ctx.db,
        CompletedPaymentOptions {
            user_id: user.id,
            listing_id: metadata.listing_id,
            payment_type: metadata.purchase,
            amount: transaction.amount_major(),
            reference: req.reference.clone(),
            method: "paystack".to_string(),
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to record payment");
        plain_error(StatusCode::INTERNAL_SERVER_ERROR, "unable to record payment")
    })?;

    if recorded.is_none() {
        tracing::debug!(reference = %req.reference, "repeat verification, nothing written");
    }

    Ok(Json(VerifyPaymentResponse {
        status: status.to_string(),
        payment_type: metadata.purchase,
        promoted_until,
    }))
}
