use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use model::payment::PaymentType;
use paystack_client::metadata::PaymentMetadata;
use paystack_client::phone::format_msisdn;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::payments::{billing_email, gateway_error, load_account, plain_error, PaymentError};
use crate::constants::VERIFICATION_FEE_KES;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct VerifyAccountRequest {
    /// M-Pesa number; omitting it opens a redirect checkout instead
    pub phone: Option<String>,
}

/// Starts the account-verification fee purchase. Paying the fee does not by
/// itself verify the account; that stays gated on operator review of the
/// identity document.
#[utoipa::path(
        post,
        tag = "payments",
        operation_id = "verify_account_payment",
        path = "/payments/verify_account",
        request_body = VerifyAccountRequest,
        responses(
            (status = 200, description = "gateway session data"),
            (status = 400, description = "validation failure or gateway decline"),
            (status = 401, body = String),
            (status = 500, description = "gateway unreachable"),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn verify_account_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Json(req): Json<VerifyAccountRequest>,
) -> Result<Json<serde_json::Value>, PaymentError> {
    let account = load_account(&ctx.db, user.id).await?;
    let email = billing_email(&account);
    let metadata = PaymentMetadata::new(user.id, PaymentType::Verification);
    let amount_minor = VERIFICATION_FEE_KES * 100;

    let data = match req.phone {
        Some(phone) => {
            let msisdn = format_msisdn(&phone)
                .map_err(|e| plain_error(StatusCode::BAD_REQUEST, e.to_string()))?;
            let charge = ctx
                .paystack
                .charge_mobile_money(&email, amount_minor, &msisdn, &metadata)
                .await
                .map_err(gateway_error)?;
            serde_json::to_value(charge)
        }
        None => {
            let callback_url = format!(
                "{}/owner/dashboard?verify=callback",
                ctx.config.frontend_url.trim_end_matches('/')
            );
            let session = ctx
                .paystack
                .initialize_transaction(&email, amount_minor, &callback_url, &metadata)
                .await
                .map_err(gateway_error)?;
            serde_json::to_value(session)
        }
    }
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to serialize gateway response");
        plain_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to serialize gateway response",
        )
    })?;

    Ok(Json(data))
}
