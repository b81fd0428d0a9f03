use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body attached to 4xx/5xx responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenericErrorResponse {
    pub message: String,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
