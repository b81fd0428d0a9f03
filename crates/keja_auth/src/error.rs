use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no access token provided")]
    NoToken,
    #[error("invalid authorization header format")]
    InvalidHeaderFormat,
    #[error("token expired")]
    Expired,
    #[error("token validation failed: {details}")]
    ValidationFailed { details: String },
    #[error("wrong token type for this endpoint")]
    WrongTokenType,
    #[error("token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}
