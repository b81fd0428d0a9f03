use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use model::listing::{ListingRecord, ListingStatus};
use sqlx::{Pool, Postgres, QueryBuilder};

use super::LISTING_SELECT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// Fully parsed search criteria. Lenient parsing of the raw query string
/// happens at the API layer; by the time a value lands here it is applied
/// unconditionally.
#[derive(Debug, Clone, Default)]
pub struct ListingSearch {
    /// Mine-mode: restrict to this owner, any status or publication state
    pub owner_id: Option<i64>,
    pub published_only: bool,
    pub bounding_box: Option<BoundingBox>,
    pub property_type: Option<String>,
    /// Case-insensitive substring match on the free-text location
    pub location: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i64>,
    pub verified_owners_only: bool,
    pub promoted_only: bool,
    pub status: Option<ListingStatus>,
    pub created_after: Option<DateTime<Utc>>,
}

/// Filtered, fixed-order listing query. Ordering is promoted first, then
/// newest, and is not client-configurable.
#[tracing::instrument(skip(db))]
pub async fn search_listings(
    db: &Pool<Postgres>,
    search: &ListingSearch,
) -> Result<Vec<ListingRecord>> {
    let mut qb = QueryBuilder::<Postgres>::new(LISTING_SELECT);
    qb.push(" WHERE TRUE");
    push_filters(&mut qb, search);
    qb.push(" ORDER BY l.is_promoted DESC, l.created_at DESC");

    let listings = qb
        .build_query_as::<ListingRecord>()
        .fetch_all(db)
        .await
        .context("unable to search listings")?;

    Ok(listings)
}

pub(crate) fn push_filters<'a>(qb: &mut QueryBuilder<'a, Postgres>, search: &'a ListingSearch) {
    if let Some(owner_id) = search.owner_id {
        qb.push(" AND l.owner_id = ").push_bind(owner_id);
    }
    if search.published_only {
        qb.push(" AND l.is_published = TRUE");
    }
    if let Some(bbox) = &search.bounding_box {
        qb.push(" AND l.latitude >= ").push_bind(bbox.lat_min);
        qb.push(" AND l.latitude <= ").push_bind(bbox.lat_max);
        qb.push(" AND l.longitude >= ").push_bind(bbox.lng_min);
        qb.push(" AND l.longitude <= ").push_bind(bbox.lng_max);
    }
    if let Some(property_type) = &search.property_type {
        qb.push(" AND l.property_type = ")
            .push_bind(property_type.as_str());
    }
    if let Some(location) = &search.location {
        qb.push(" AND l.location ILIKE ")
            .push_bind(format!("%{}%", escape_like(location)));
    }
    if let Some(min_price) = search.min_price {
        qb.push(" AND l.rent_per_month >= ").push_bind(min_price);
    }
    if let Some(max_price) = search.max_price {
        qb.push(" AND l.rent_per_month <= ").push_bind(max_price);
    }
    if let Some(min_bedrooms) = search.min_bedrooms {
        qb.push(" AND l.bedrooms >= ").push_bind(min_bedrooms);
    }
    if search.verified_owners_only {
        qb.push(" AND u.is_verified = TRUE");
    }
    if search.promoted_only {
        qb.push(" AND l.is_promoted = TRUE");
    }
    if let Some(status) = search.status {
        qb.push(" AND l.status = ").push_bind(status);
    }
    if let Some(created_after) = search.created_after {
        qb.push(" AND l.created_at >= ").push_bind(created_after);
    }
}

/// Escape LIKE metacharacters so a search for "100%_sea_view" matches
/// literally
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(escape_like("100%_view"), "100\\%\\_view");
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn empty_search_adds_no_binds() {
        let search = ListingSearch::default();
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 WHERE TRUE");
        push_filters(&mut qb, &search);
        assert_eq!(qb.sql(), "SELECT 1 WHERE TRUE");
    }

    #[test]
    fn filters_compose_into_the_where_clause() {
        let search = ListingSearch {
            published_only: true,
            min_price: Some(5000),
            max_price: Some(15000),
            promoted_only: true,
            ..Default::default()
        };
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1 WHERE TRUE");
        push_filters(&mut qb, &search);
        let sql = qb.sql();
        assert!(sql.contains("l.is_published = TRUE"));
        assert!(sql.contains("l.rent_per_month >= $1"));
        assert!(sql.contains("l.rent_per_month <= $2"));
        assert!(sql.contains("l.is_promoted = TRUE"));
    }
}
