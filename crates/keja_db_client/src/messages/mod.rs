pub mod create_message;
pub mod list_messages;
pub mod mark_read;

pub(crate) const MESSAGE_SELECT: &str = r#"
    SELECT
        m.id, m.inquiry_id, m.sender_id, u.username AS sender_name,
        m.content, m.is_read, m.created_at
    FROM messages m
    JOIN users u ON u.id = m.sender_id
"#;
