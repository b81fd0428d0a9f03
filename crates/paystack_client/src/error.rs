use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaystackClientError {
    /// The request never produced a usable response
    #[error("unable to reach payment gateway: {details}")]
    Transport { details: String },
    /// The gateway answered and said no; `details` is the raw provider
    /// payload for the caller to surface
    #[error("payment gateway declined the request: {message}")]
    Declined {
        message: String,
        details: serde_json::Value,
    },
    /// A 2xx whose body did not match the documented shape
    #[error("unexpected payment gateway response: {details}")]
    Unexpected { details: String },
}

impl PaystackClientError {
    /// Provider diagnostic payload, when one was returned
    pub fn provider_details(&self) -> Option<&serde_json::Value> {
        match self {
            PaystackClientError::Declined { details, .. } => Some(details),
            _ => None,
        }
    }
}
