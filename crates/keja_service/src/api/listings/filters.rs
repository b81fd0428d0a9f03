use chrono::{DateTime, Duration, Utc};
use keja_auth::AuthUser;
use keja_db_client::listings::search_listings::{BoundingBox, ListingSearch};
use model::listing::ListingStatus;
use serde::Deserialize;

use crate::constants::NEWLY_LISTED_WINDOW_DAYS;

/// Raw query string as received. Everything is optional text; parsing is
/// deliberately forgiving: a malformed value drops its filter instead of
/// failing the request, so invalid input is indistinguishable from "no
/// filter requested".
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListingQuery {
    pub mode: Option<String>,
    pub lat_min: Option<String>,
    pub lat_max: Option<String>,
    pub lng_min: Option<String>,
    pub lng_max: Option<String>,
    pub property_type: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
    pub verified_only: Option<String>,
    pub promoted_only: Option<String>,
    pub status: Option<String>,
    pub newly_listed: Option<String>,
}

/// The fixed truthy set for boolean flags; anything else is ignored
fn is_truthy(value: Option<&String>) -> bool {
    matches!(value.map(String::as_str), Some("true") | Some("1") | Some("True"))
}

pub fn build_search(
    query: &ListingQuery,
    viewer: Option<&AuthUser>,
    now: DateTime<Utc>,
) -> ListingSearch {
    let mut search = ListingSearch::default();

    // Mine-mode shows the owner everything; explore mode only published
    // listings, defaulting to active status.
    let mine = query.mode.as_deref() == Some("mine");
    match (mine, viewer) {
        (true, Some(user)) => {
            search.owner_id = Some(user.id);
        }
        _ => {
            search.published_only = true;
            search.status = match query.status.as_deref() {
                None => Some(ListingStatus::Active),
                Some("") => None,
                Some(raw) => raw.parse().ok(),
            };
        }
    }

    // The box applies only when all four corners parse
    if let (Some(lat_min), Some(lat_max), Some(lng_min), Some(lng_max)) = (
        parse_f64(query.lat_min.as_deref()),
        parse_f64(query.lat_max.as_deref()),
        parse_f64(query.lng_min.as_deref()),
        parse_f64(query.lng_max.as_deref()),
    ) {
        search.bounding_box = Some(BoundingBox {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        });
    }

    search.property_type = query.property_type.clone().filter(|s| !s.is_empty());
    search.location = query.location.clone().filter(|s| !s.is_empty());
    search.min_price = parse_i64(query.min_price.as_deref());
    search.max_price = parse_i64(query.max_price.as_deref());
    search.min_bedrooms = parse_i64(query.bedrooms.as_deref());
    search.verified_owners_only = is_truthy(query.verified_only.as_ref());
    search.promoted_only = is_truthy(query.promoted_only.as_ref());

    if is_truthy(query.newly_listed.as_ref()) {
        search.created_after = Some(now - Duration::days(NEWLY_LISTED_WINDOW_DAYS));
    }

    search
}

fn parse_f64(value: Option<&str>) -> Option<f64> {
    value.filter(|s| !s.is_empty()).and_then(|s| s.parse().ok())
}

fn parse_i64(value: Option<&str>) -> Option<i64> {
    value.filter(|s| !s.is_empty()).and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::user::UserRole;

    fn viewer() -> AuthUser {
        AuthUser {
            id: 5,
            username: "mwangi".to_string(),
            role: UserRole::Landlord,
            is_staff: false,
        }
    }

    #[test]
    fn defaults_to_published_active_listings() {
        let search = build_search(&ListingQuery::default(), None, Utc::now());
        assert!(search.published_only);
        assert_eq!(search.status, Some(ListingStatus::Active));
        assert!(search.owner_id.is_none());
    }

    #[test]
    fn mine_mode_scopes_to_owner_with_no_status_filter() {
        let query = ListingQuery {
            mode: Some("mine".to_string()),
            ..Default::default()
        };
        let search = build_search(&query, Some(&viewer()), Utc::now());
        assert_eq!(search.owner_id, Some(5));
        assert!(!search.published_only);
        assert!(search.status.is_none());
    }

    #[test]
    fn mine_mode_without_auth_falls_back_to_explore() {
        let query = ListingQuery {
            mode: Some("mine".to_string()),
            ..Default::default()
        };
        let search = build_search(&query, None, Utc::now());
        assert!(search.owner_id.is_none());
        assert!(search.published_only);
    }

    #[test]
    fn malformed_price_is_dropped_not_an_error() {
        let query = ListingQuery {
            min_price: Some("abc".to_string()),
            max_price: Some("15000".to_string()),
            ..Default::default()
        };
        let search = build_search(&query, None, Utc::now());
        assert_eq!(search.min_price, None);
        assert_eq!(search.max_price, Some(15000));
    }

    #[test]
    fn partial_bounding_box_is_ignored() {
        let query = ListingQuery {
            lat_min: Some("-1.4".to_string()),
            lat_max: Some("-1.1".to_string()),
            lng_min: Some("36.6".to_string()),
            ..Default::default()
        };
        let search = build_search(&query, None, Utc::now());
        assert!(search.bounding_box.is_none());
    }

    #[test]
    fn malformed_bounding_box_corner_is_ignored() {
        let query = ListingQuery {
            lat_min: Some("-1.4".to_string()),
            lat_max: Some("north".to_string()),
            lng_min: Some("36.6".to_string()),
            lng_max: Some("37.1".to_string()),
            ..Default::default()
        };
        let search = build_search(&query, None, Utc::now());
        assert!(search.bounding_box.is_none());
    }

    #[test]
    fn boolean_flags_recognize_the_fixed_truthy_set() {
        for value in ["true", "1", "True"] {
            let query = ListingQuery {
                verified_only: Some(value.to_string()),
                ..Default::default()
            };
            assert!(build_search(&query, None, Utc::now()).verified_owners_only);
        }
        let query = ListingQuery {
            verified_only: Some("yes".to_string()),
            ..Default::default()
        };
        assert!(!build_search(&query, None, Utc::now()).verified_owners_only);
    }

    #[test]
    fn newly_listed_restricts_to_the_last_two_weeks() {
        let now = Utc::now();
        let query = ListingQuery {
            newly_listed: Some("1".to_string()),
            ..Default::default()
        };
        let search = build_search(&query, None, now);
        assert_eq!(search.created_after, Some(now - Duration::days(14)));
    }

    #[test]
    fn empty_status_clears_the_default_filter() {
        let query = ListingQuery {
            status: Some(String::new()),
            ..Default::default()
        };
        let search = build_search(&query, None, Utc::now());
        assert!(search.status.is_none());
    }

    #[test]
    fn explicit_status_overrides_the_default() {
        let query = ListingQuery {
            status: Some("rented".to_string()),
            ..Default::default()
        };
        let search = build_search(&query, None, Utc::now());
        assert_eq!(search.status, Some(ListingStatus::Rented));
    }
}
