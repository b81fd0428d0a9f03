use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use keja_auth::AuthUser;
use keja_db_client::images::add_image::add_image;
use model::listing::ListingResponse;

use crate::api::context::AppState;
use crate::api::listings::view::listing_response;
use crate::api::listings::{fetch_listing, require_owner};
use crate::utils::media::save_upload;

/// Multipart image upload, owner only. Accepts one or more parts named
/// "images"; responds with the refreshed listing.
#[utoipa::path(
        post,
        tag = "listings",
        operation_id = "upload_images",
        path = "/listings/{key}/images",
        params(
            ("key" = String, Path, description = "listing id or slug")
        ),
        responses(
            (status = 200, body = ListingResponse),
            (status = 400, body = String),
            (status = 401, body = String),
            (status = 403, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip(ctx, multipart))]
pub async fn upload_images_handler(
    State(ctx): State<AppState>,
    user: AuthUser,
    Path(key): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ListingResponse>, (StatusCode, String)> {
    let listing = fetch_listing(&ctx.db, &key).await?;
    require_owner(&listing, &user)?;

    let mut uploaded = 0usize;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!(error = ?e, "unable to read multipart field");
        (
            StatusCode::BAD_REQUEST,
            "unable to read multipart body".to_string(),
        )
    })? {
        if field.name() != Some("images") {
            continue;
        }

        let file_name = field.file_name().map(|name| name.to_string());
        let bytes = field.bytes().await.map_err(|e| {
            tracing::error!(error = ?e, "unable to read upload bytes");
            (
                StatusCode::BAD_REQUEST,
                "unable to read upload bytes".to_string(),
            )
        })?;

        let file_path = save_upload(
            &ctx.config.media_root,
            "listing_images",
            file_name.as_deref(),
            &bytes,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to store upload");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to store upload".to_string(),
            )
        })?;

        add_image(&ctx.db, listing.id, &file_path)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "unable to save image record");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "unable to save image record".to_string(),
                )
            })?;

        uploaded += 1;
    }

    if uploaded == 0 {
        return Err((StatusCode::BAD_REQUEST, "no images provided".to_string()));
    }

    let listing = listing_response(&ctx.db, listing, Some(&user))
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
