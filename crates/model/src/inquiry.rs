use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inquiry row joined with the listing it targets and the account that
/// opened it. The listing owner id rides along for participant checks.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InquiryRecord {
    pub id: i64,
    pub listing_id: i64,
    pub listing_title: String,
    pub listing_owner_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub message: String,
    pub contact_phone: String,
    pub created_at: DateTime<Utc>,
}

impl InquiryRecord {
    /// Only the inquiry creator and the listing owner take part in the
    /// conversation
    pub fn is_participant(&self, user_id: i64) -> bool {
        self.user_id == user_id || self.listing_owner_id == user_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct MessageWithSender {
    pub id: i64,
    pub inquiry_id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InquiryResponse {
    pub id: i64,
    pub listing_id: i64,
    pub listing_title: String,
    pub listing_owner_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub message: String,
    pub contact_phone: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<MessageWithSender>,
}

impl InquiryResponse {
    pub fn assemble(record: InquiryRecord, messages: Vec<MessageWithSender>) -> Self {
        Self {
            id: record.id,
            listing_id: record.listing_id,
            listing_title: record.listing_title,
            listing_owner_id: record.listing_owner_id,
            user_id: record.user_id,
            user_name: record.user_name,
            message: record.message,
            contact_phone: record.contact_phone,
            created_at: record.created_at,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user_id: i64, owner_id: i64) -> InquiryRecord {
        InquiryRecord {
            id: 1,
            listing_id: 10,
            listing_title: "2BR in Kilimani".to_string(),
            listing_owner_id: owner_id,
            user_id,
            user_name: "wanjiku".to_string(),
            message: "Is this still available?".to_string(),
            contact_phone: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn creator_and_owner_are_participants() {
        let inquiry = record(3, 7);
        assert!(inquiry.is_participant(3));
        assert!(inquiry.is_participant(7));
    }

    #[test]
    fn third_parties_are_not_participants() {
        let inquiry = record(3, 7);
        assert!(!inquiry.is_participant(11));
    }
}
