pub mod create_inquiry;
pub mod get_inquiry;
pub mod list_inquiries;

/// Inquiry rows carry their listing context for participant checks; see
/// [model::inquiry::InquiryRecord].
pub(crate) const INQUIRY_SELECT: &str = r#"
    SELECT
        i.id, i.listing_id, l.title AS listing_title,
        l.owner_id AS listing_owner_id,
        i.user_id, u.username AS user_name,
        i.message, i.contact_phone, i.created_at
    FROM inquiries i
    JOIN listings l ON l.id = i.listing_id
    JOIN users u ON u.id = i.user_id
"#;
