use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::inquiries::list_inquiries::{list_inquiries, InquiryScope};
use keja_db_client::messages::list_messages::list_messages_for_inquiries;
use model::inquiry::InquiryResponse;
use serde::Deserialize;
use std::collections::HashMap;

use crate::api::context::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct InquiryListQuery {
    /// Optional listing filter; malformed ids are ignored
    pub listing: Option<String>,
}

/// Conversations the caller takes part in, threaded messages included.
/// Staff see every inquiry.
#[utoipa::path(
        get,
        tag = "inquiries",
        operation_id = "list_inquiries",
        path = "/inquiries",
        responses(
            (status = 200, body = Vec<InquiryResponse>),
            (status = 401, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn list_inquiries_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Query(query): Query<InquiryListQuery>,
) -> Result<Json<Vec<InquiryResponse>>, (StatusCode, String)> {
    let internal = |e: anyhow::Error| {
        tracing::error!(error = ?e, "unable to list inquiries");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to list inquiries".to_string(),
        )
    };

    let scope = if user.is_staff {
        InquiryScope::All
    } else {
        InquiryScope::Participant(user.id)
    };
    let listing_id = query.listing.as_deref().and_then(|raw| raw.parse().ok());

    let inquiries = list_inquiries(&ctx.db, scope, listing_id)
        .await
        .map_err(internal)?;

    let inquiry_ids: Vec<i64> = inquiries.iter().map(|i| i.id).collect();
    let messages = list_messages_for_inquiries(&ctx.db, &inquiry_ids)
        .await
        .map_err(internal)?;

    let mut by_inquiry: HashMap<i64, Vec<_>> = HashMap::new();
    for message in messages {
        by_inquiry.entry(message.inquiry_id).or_default().push(message);
    }

    let responses = inquiries
        .into_iter()
        .map(|record| {
            let thread = by_inquiry.remove(&record.id).unwrap_or_default();
            InquiryResponse::assemble(record, thread)
        })
        .collect();

    Ok(Json(responses))
}
