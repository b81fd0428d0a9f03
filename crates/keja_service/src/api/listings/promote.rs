use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use model::payment::PaymentType;
use paystack_client::metadata::PaymentMetadata;
use paystack_client::phone::format_msisdn;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::listings::{fetch_listing, require_owner};
use crate::api::payments::{billing_email, gateway_error, load_account, plain_error, PaymentError};
use crate::constants::{promotion_price, DEFAULT_PROMOTION_DAYS};

#[derive(Debug, Deserialize, ToSchema)]
pub struct PromoteListingRequest {
    /// M-Pesa number; omitting it opens a redirect checkout instead
    pub phone: Option<String>,
    #[serde(default = "default_duration")]
    pub duration_days: i64,
}

fn default_duration() -> i64 {
    DEFAULT_PROMOTION_DAYS
}

/// Starts a promotion purchase for a listing, owner only. With a phone an
/// M-Pesa push goes out; without one the response carries a checkout URL.
/// Either way the gateway session data is passed through to the caller.
#[utoipa::path(
        post,
        tag = "payments",
        operation_id = "promote_listing",
        path = "/listings/{key}/promote",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        request_body = PromoteListingRequest,
        responses(
            (status = 200, description = "gateway session data"),
            (status = 400, description = "gateway decline with provider payload"),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 500, description = "gateway unreachable"),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn promote_listing_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(key): Path<String>,
    Json(req): Json<PromoteListingRequest>,
) -> Result<Json<serde_json::Value>, PaymentError> {
    let listing = fetch_listing(&ctx.db, &key)
        .await
        .map_err(|(status, message)| plain_error(status, message))?;
    require_owner(&listing, &user).map_err(|(status, message)| plain_error(status, message))?;

    let account = load_account(&ctx.db, user.id).await?;
    let email = billing_email(&account);

    let amount = promotion_price(req.duration_days);
    let metadata = PaymentMetadata::new(user.id, PaymentType::Promotion)
        .listing(listing.id)
        .duration_days(req.duration_days);

    let data = match req.phone {
        Some(phone) => {
            let msisdn = format_msisdn(&phone)
                .map_err(|e| plain_error(StatusCode::BAD_REQUEST, e.to_string()))?;
            let charge = ctx
                .paystack
                .charge_mobile_money(&email, amount * 100, &msisdn, &metadata)
                .await
                .map_err(gateway_error)?;
            serde_json::to_value(charge)
        }
        None => {
            let callback_url = format!(
                "{}/owner/dashboard?promote=callback&listing_id={}",
                ctx.config.frontend_url.trim_end_matches('/'),
                listing.id
            );
            let session = ctx
                .paystack
                .initialize_transaction(&email, amount * 100, &callback_url, &metadata)
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
