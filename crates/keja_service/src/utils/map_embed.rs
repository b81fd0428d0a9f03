use regex::Regex;
use std::sync::OnceLock;

static LAT_RE: OnceLock<Regex> = OnceLock::new();
static LNG_RE: OnceLock<Regex> = OnceLock::new();

/// Pulls coordinates out of a Google Maps embed snippet. In the embed pb
/// string `!3d` precedes the latitude and `!2d` the longitude. Returns None
/// when either marker is missing, so embeds from other providers silently
/// leave coordinates unset.
pub fn extract_coords(embed: &str) -> Option<(f64, f64)> {
    let lat_re = LAT_RE.get_or_init(|| Regex::new(r"!3d([-0-9.]+)").unwrap());
    let lng_re = LNG_RE.get_or_init(|| Regex::new(r"!2d([-0-9.]+)").unwrap());

    let lat = lat_re.captures(embed)?.get(1)?.as_str().parse::<f64>().ok()?;
    let lng = lng_re.captures(embed)?.get(1)?.as_str().parse::<f64>().ok()?;

    Some((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3988.817!2d36.8219462!3d-1.2920659!2m3!1f0!2f0!3f0";

    #[test]
    fn extracts_lat_lng_from_embed() {
        let (lat, lng) = extract_coords(EMBED).unwrap();
        assert!((lat - -1.2920659).abs() < 1e-9);
        assert!((lng - 36.8219462).abs() < 1e-9);
    }

    #[test]
    fn missing_marker_yields_none() {
        assert_eq!(extract_coords("https://example.com/maps?pb=!2d36.8"), None);
        assert_eq!(extract_coords(""), None);
    }

    #[test]
    fn foreign_provider_embed_yields_none() {
        assert_eq!(
            extract_coords("https://www.openstreetmap.org/export/embed.html?bbox=36.8,-1.3"),
            None
        );
    }
}
