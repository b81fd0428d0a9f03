use model::listing::ListingRecord;

// The built index.html carries these exact placeholder contents; the
// replacement below is keyed on matching them verbatim.
pub const DEFAULT_TITLE: &str = "KejaHunt Kenya - Find Your Perfect Home";
pub const DEFAULT_DESCRIPTION: &str =
    "Find and list rental properties in Kenya. Connect with landlords and tenants seamlessly.";
pub const DEFAULT_IMAGE: &str = "https://kejahunt.co.ke/icon-512.png";
pub const DEFAULT_URL: &str = "https://kejahunt.co.ke/";

/// Rewrites the SPA shell's social preview tags for one listing so crawlers
/// render a proper card. Plain string substitution against the default
/// placeholder contents; anything that doesn't match is left alone.
pub fn inject_listing_tags(
    html: &str,
    listing: &ListingRecord,
    image_url: &str,
    canonical_url: &str,
) -> String {
    let title = format!("{} | KejaHunt Kenya", listing.title);
    let description = format!(
        "{} in {} for KES {}/month. {}...",
        humanize_type(&listing.property_type),
        listing.location,
        format_kes(listing.rent_per_month),
        truncate(&listing.description, 150),
    );

    html.replace(
        &format!("content=\"{DEFAULT_TITLE}\""),
        &format!("content=\"{title}\""),
    )
    .replace(
        &format!("content=\"{DEFAULT_DESCRIPTION}\""),
        &format!("content=\"{description}\""),
    )
    .replace(
        &format!("content=\"{DEFAULT_IMAGE}\""),
        &format!("content=\"{image_url}\""),
    )
    .replace(
        &format!("content=\"{DEFAULT_URL}\""),
        &format!("content=\"{canonical_url}\""),
    )
    .replace(
        &format!("<title>{DEFAULT_TITLE}</title>"),
        &format!("<title>{title}</title>"),
    )
}

/// "semi_detached" -> "Semi Detached"
fn humanize_type(property_type: &str) -> String {
    property_type
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Thousands-separated whole KES
fn format_kes(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if amount < 0 {
        format!("-{out}")
    } else {
        out
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use model::listing::ListingStatus;
    use sqlx::types::Json;

    fn listing() -> ListingRecord {
        ListingRecord {
            id: 12,
            owner_id: 3,
            title: "Smart Hut Apartments".to_string(),
            slug: "smart-hut-apartments".to_string(),
            description: "Bright two-bedroom with a view of the park".to_string(),
            property_type: "semi_detached".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            rent_per_month: 45500,
            deposit: 45500,
            location: "Kilimani".to_string(),
            contact_phone: String::new(),
            latitude: None,
            longitude: None,
            amenities: Json(vec![]),
            map_embed: String::new(),
            status: ListingStatus::Active,
            is_published: true,
            is_promoted: false,
            promoted_until: None,
            views: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            owner_name: "mwangi".to_string(),
            owner_verified: true,
        }
    }

    fn shell() -> String {
        format!(
            r#"<html><head><title>{DEFAULT_TITLE}</title>
<meta property="og:title" content="{DEFAULT_TITLE}">
<meta property="og:description" content="{DEFAULT_DESCRIPTION}">
<meta property="og:image" content="{DEFAULT_IMAGE}">
<meta property="og:url" content="{DEFAULT_URL}">
</head><body></body></html>"#
        )
    }

    #[test]
    fn replaces_every_placeholder() {
        let html = inject_listing_tags(
            &shell(),
            &listing(),
            "https://kejahunt.co.ke/media/listing_images/a.jpg",
            "https://kejahunt.co.ke/property/smart-hut-apartments",
        );

        assert!(html.contains("<title>Smart Hut Apartments | KejaHunt Kenya</title>"));
        assert!(html.contains("Semi Detached in Kilimani for KES 45,500/month"));
        assert!(html.contains("https://kejahunt.co.ke/media/listing_images/a.jpg"));
        assert!(html.contains("https://kejahunt.co.ke/property/smart-hut-apartments"));
        assert!(!html.contains(DEFAULT_TITLE));
    }

    #[test]
    fn unrelated_markup_is_untouched() {
        let html = "<html><head><title>Someone Else</title></head></html>";
        let injected = inject_listing_tags(
            html,
            &listing(),
            "https://example.com/x.jpg",
            "https://example.com/",
        );
        assert_eq!(injected, html);
    }

    #[test]
    fn kes_formatting_groups_thousands() {
        assert_eq!(format_kes(999), "999");
        assert_eq!(format_kes(45500), "45,500");
        assert_eq!(format_kes(1499000), "1,499,000");
    }

    #[test]
    fn humanizes_property_types() {
        assert_eq!(humanize_type("semi_detached"), "Semi Detached");
        assert_eq!(humanize_type("villa"), "Villa");
    }
}
