use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use model::user::{User, UserRole};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Access tokens authenticate API calls; refresh tokens only mint new access
/// tokens.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 60;
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: i64,
    pub username: String,
    pub role: UserRole,
    pub is_staff: bool,
    pub token_type: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// HS256 signing material shared by every token operation
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, AuthError> {
        let access = self.issue(user, TokenKind::Access)?;
        let refresh = self.issue(user, TokenKind::Refresh)?;
        Ok(TokenPair { access, refresh })
    }

    pub fn issue(&self, user: &User, kind: TokenKind) -> Result<String, AuthError> {
        let now = Utc::now();
        let ttl = match kind {
            TokenKind::Access => Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
            TokenKind::Refresh => Duration::days(REFRESH_TOKEN_TTL_DAYS),
        };
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            is_staff: user.is_staff,
            token_type: kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify the signature and expiry, then check the token kind matches
    /// the caller's expectation.
    pub fn validate(&self, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let decoded = match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(decoded) => decoded.claims,
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    return Err(AuthError::Expired);
                }
                _ => {
                    return Err(AuthError::ValidationFailed {
                        details: e.to_string(),
                    });
                }
            },
        };

        if decoded.token_type != expected {
            return Err(AuthError::WrongTokenType);
        }

        Ok(decoded)
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

#[cfg(test)]
pub(crate) fn test_user() -> User {
    User {
        id: 7,
        username: "mwangi".to_string(),
        email: "mwangi@example.com".to_string(),
        password_hash: "!".to_string(),
        full_name: "Mwangi Otieno".to_string(),
        phone: String::new(),
        role: UserRole::Landlord,
        is_staff: false,
        is_active: true,
        is_verified: false,
        verification_date: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trips() {
        let keys = JwtKeys::new("test-secret");
        let pair = keys.issue_pair(&test_user()).unwrap();

        let claims = keys.validate(&pair.access, TokenKind::Access).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "mwangi");
        assert_eq!(claims.role, UserRole::Landlord);
        assert!(!claims.is_staff);
    }

    #[test]
    fn refresh_token_is_rejected_as_access() {
        let keys = JwtKeys::new("test-secret");
        let pair = keys.issue_pair(&test_user()).unwrap();

        assert!(matches!(
            keys.validate(&pair.refresh, TokenKind::Access),
            Err(AuthError::WrongTokenType)
        ));
        assert!(keys.validate(&pair.refresh, TokenKind::Refresh).is_ok());
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let keys = JwtKeys::new("test-secret");
        let other = JwtKeys::new("other-secret");
        let pair = keys.issue_pair(&test_user()).unwrap();

        assert!(matches!(
            other.validate(&pair.access, TokenKind::Access),
            Err(AuthError::ValidationFailed { .. })
        ));
    }
}
