use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
};
use keja_db_client::images::get_images::get_images;
use keja_db_client::listings::get_listing::get_listing;
use model::listing::{media_url, ListingKey};

use crate::api::context::AppState;

pub mod og;

/// Catch-all for the SPA. Listing detail paths get their Open Graph tags
/// rewritten so social crawlers show a preview card; every other path, and
/// any failure during injection, serves the untouched shell.
#[tracing::instrument(skip(ctx))]
pub async fn serve_spa_handler(
    State(ctx): State<AppState>,
    uri: Uri,
) -> Result<Html<String>, (StatusCode, String)> {
    let index_path = ctx.config.frontend_dist.join("index.html");
    let html = tokio::fs::read_to_string(&index_path).await.map_err(|e| {
        tracing::error!(error = ?e, path = %index_path.display(), "frontend build missing");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "frontend build not found".to_string(),
        )
    })?;

    let path = uri.path().trim_start_matches('/').to_string();
    if let Some(rest) = path.strip_prefix("property/") {
        let segment = rest.split('/').next().unwrap_or_default();
        if !segment.is_empty() {
            match inject_for_listing(&ctx, &html, segment, &path).await {
                Ok(Some(injected)) => return Ok(Html(injected)),
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(error = ?e, "error injecting meta tags");
                }
            }
        }
    }

    Ok(Html(html))
}

async fn inject_for_listing(
    ctx: &AppState,
    html: &str,
    segment: &str,
    path: &str,
) -> anyhow::Result<Option<String>> {
    let Some(listing) = get_listing(&ctx.db, &ListingKey::parse(segment)).await? else {
        return Ok(None);
    };

    let base = ctx.config.frontend_url.trim_end_matches('/');

    // Primary image first (images come back primary-first), falling back to
    // the default card image
    let images = get_images(&ctx.db, listing.id).await?;
    let image_url = match images.first() {
        Some(image) if image.file_path.starts_with("http") => image.file_path.clone(),
        Some(image) => format!("{base}{}", media_url(&image.file_path)),
        None => og::DEFAULT_IMAGE.to_string(),
    };

    let canonical_url = format!("{base}/{path}");

    Ok(Some(og::inject_listing_tags(
        html,
        &listing,
        &image_url,
        &canonical_url,
    )))
}
