use model::payment::PaymentType;
use serde::{Deserialize, Serialize};

/// Purchase context attached to every charge and read back at verification
/// time. This is the only state that survives between initiate and verify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMetadata {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub purchase: PaymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
}

impl PaymentMetadata {
    pub fn new(user_id: i64, purchase: PaymentType) -> Self {
        Self {
            user_id,
            purchase,
            listing_id: None,
            duration_days: None,
        }
    }

    pub fn listing(mut self, listing_id: i64) -> Self {
        self.listing_id = Some(listing_id);
        self
    }

    pub fn duration_days(mut self, days: i64) -> Self {
        self.duration_days = Some(days);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_type_serializes_under_type_key() {
        let metadata = PaymentMetadata::new(9, PaymentType::Promotion)
            .listing(42)
            .duration_days(7);
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["type"], "promotion");
        assert_eq!(value["user_id"], 9);
        assert_eq!(value["listing_id"], 42);
        assert_eq!(value["duration_days"], 7);
    }

    #[test]
    fn optional_fields_are_omitted() {
        let metadata = PaymentMetadata::new(9, PaymentType::Verification);
        let value = serde_json::to_value(&metadata).unwrap();
        assert!(value.get("listing_id").is_none());
        assert!(value.get("duration_days").is_none());
    }

    #[test]
    fn round_trips_through_the_gateway_echo() {
        let metadata = PaymentMetadata::new(9, PaymentType::ContactAccess).listing(42);
        let echoed: PaymentMetadata =
            serde_json::from_value(serde_json::to_value(&metadata).unwrap()).unwrap();
        assert_eq!(echoed, metadata);
    }
}
