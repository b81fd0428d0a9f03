use anyhow::{Context, Result};
use model::listing::{ListingKey, ListingRecord, ListingStatus};
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use super::get_listing::get_listing;

#[derive(Debug)]
pub struct CreateListingOptions {
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub rent_per_month: i64,
    pub deposit: i64,
    pub location: String,
    pub contact_phone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenities: Vec<String>,
    pub map_embed: String,
    pub status: ListingStatus,
}

#[tracing::instrument(skip(db, options))]
pub async fn create_listing(
    db: &Pool<Postgres>,
    options: CreateListingOptions,
) -> Result<ListingRecord> {
    let slug = next_free_slug(db, &options.title).await?;

    let (id,) = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO listings
            (owner_id, title, slug, description, property_type, bedrooms,
             bathrooms, rent_per_month, deposit, location, contact_phone,
             latitude, longitude, amenities, map_embed, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        RETURNING id
        "#,
    )
    .bind(options.owner_id)
    .bind(&options.title)
    .bind(&slug)
    .bind(&options.description)
    .bind(&options.property_type)
    .bind(options.bedrooms)
    .bind(options.bathrooms)
    .bind(options.rent_per_month)
    .bind(options.deposit)
    .bind(&options.location)
    .bind(&options.contact_phone)
    .bind(options.latitude)
    .bind(options.longitude)
    .bind(Json(options.amenities))
    .bind(&options.map_embed)
    .bind(options.status)
    .fetch_one(db)
    .await
    .context("unable to create listing")?;

    get_listing(db, &ListingKey::Id(id))
        .await?
        .context("listing missing right after insert")
}

/// Slug computed once at first save: slugified title, with a numeric suffix
/// appended until the candidate is free
async fn next_free_slug(db: &Pool<Postgres>, title: &str) -> Result<String> {
    let base = slugify(title);
    let mut counter: u32 = 0;

    loop {
        let candidate = if counter == 0 {
            base.clone()
        } else {
            format!("{base}-{counter}")
        };

        let (taken,) =
            sqlx::query_as::<_, (bool,)>("SELECT EXISTS(SELECT 1 FROM listings WHERE slug = $1)")
                .bind(&candidate)
                .fetch_one(db)
                .await
                .context("unable to check slug availability")?;

        if !taken {
            return Ok(candidate);
        }
        counter += 1;
    }
}

/// Lowercase the title, keep alphanumerics, collapse everything else into
/// single hyphens
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_plain_titles() {
        assert_eq!(slugify("Smart Hut Apartments"), "smart-hut-apartments");
    }

    #[test]
    fn collapses_runs_of_separators() {
        assert_eq!(slugify("2BR  --  Kilimani!"), "2br-kilimani");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  Cozy Bedsitter  "), "cozy-bedsitter");
        assert_eq!(slugify("(Penthouse)"), "penthouse");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(slugify("Nyumba ya Chui 🐆"), "nyumba-ya-chui");
    }
}
