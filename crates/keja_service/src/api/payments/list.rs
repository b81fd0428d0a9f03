use axum::{extract::State, http::StatusCode, Json};
use keja_auth::AuthUser;
use keja_db_client::payments::list_payments::{list_all_payments, list_payments_for_user};
use model::payment::PaymentWithContext;

use crate::api::context::AppState;

/// Payment history: accounts see their own rows, staff see everything
#[utoipa::path(
        get,
        tag = "payments",
        operation_id = "list_payments",
        path = "/payments",
        responses(
            (status = 200, body = Vec<PaymentWithContext>),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn list_payments_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<PaymentWithContext>>, (StatusCode, String)> {
    let payments = if user.is_staff {
        list_all_payments(&ctx.db).await
    } else {
        list_payments_for_user(&ctx.db, user.id).await
    }
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to list payments");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to list payments".to_string(),
        )
    })?;

    Ok(Json(payments))
}
