pub mod get_document;
pub mod list_documents;
pub mod review_document;
pub mod upsert_document;
