/// Promotion tiers: whole KES per duration in days
pub const PROMOTION_PRICING: [(i64, i64); 3] = [(1, 99), (7, 499), (30, 1499)];
pub const DEFAULT_PROMOTION_DAYS: i64 = 30;

/// One-off account verification fee, whole KES
pub const VERIFICATION_FEE_KES: i64 = 999;

/// Non-expiring contact unlock fee, whole KES
pub const CONTACT_ACCESS_FEE_KES: i64 = 499;

/// "Newly listed" filter window
pub const NEWLY_LISTED_WINDOW_DAYS: i64 = 14;

/// Unknown durations are billed at the top tier, matching the pricing page
pub fn promotion_price(duration_days: i64) -> i64 {
    PROMOTION_PRICING
        .iter()
        .find(|(days, _)| *days == duration_days)
        .map(|(_, price)| *price)
        .unwrap_or(1499)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiers_resolve() {
        assert_eq!(promotion_price(1), 99);
        assert_eq!(promotion_price(7), 499);
        assert_eq!(promotion_price(30), 1499);
    }

    #[test]
    fn unknown_durations_fall_back_to_top_tier() {
        assert_eq!(promotion_price(14), 1499);
        assert_eq!(promotion_price(0), 1499);
    }
}
