use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use model::user::User;
use serde::{Deserialize, Serialize};

use crate::claims::JwtKeys;
use crate::error::AuthError;

pub const RESET_TOKEN_TTL_MINUTES: i64 = 60;

const RESET_PURPOSE: &str = "password_reset";

/// Signed password-reset link payload. The fingerprint binds the token to the
/// password hash it was issued against, so resetting the password kills every
/// outstanding link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetClaims {
    pub sub: i64,
    pub email: String,
    pub purpose: String,
    pub fingerprint: String,
    pub iat: i64,
    pub exp: i64,
}

pub fn password_fingerprint(password_hash: &str) -> String {
    let tail = password_hash
        .chars()
        .rev()
        .take(16)
        .collect::<String>();
    tail.chars().rev().collect()
}

pub fn issue_reset_token(keys: &JwtKeys, user: &User) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = ResetClaims {
        sub: user.id,
        email: user.email.clone(),
        purpose: RESET_PURPOSE.to_string(),
        fingerprint: password_fingerprint(&user.password_hash),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(RESET_TOKEN_TTL_MINUTES)).timestamp(),
    };
    Ok(encode(&Header::default(), &claims, keys.encoding_key())?)
}

/// Validate a reset token against the account's current password hash. A
/// token issued before the last password change no longer matches the
/// fingerprint and is rejected.
pub fn validate_reset_token(
    keys: &JwtKeys,
    token: &str,
    current_password_hash: &str,
) -> Result<ResetClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let decoded = match decode::<ResetClaims>(token, keys.decoding_key(), &validation) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => return Err(AuthError::Expired),
            _ => {
                return Err(AuthError::ValidationFailed {
                    details: e.to_string(),
                });
            }
        },
    };

    if decoded.purpose != RESET_PURPOSE {
        return Err(AuthError::WrongTokenType);
    }

    if decoded.fingerprint != password_fingerprint(current_password_hash) {
        return Err(AuthError::ValidationFailed {
            details: "reset token no longer matches the account password".to_string(),
        });
    }

    Ok(decoded)
}

/// Peek at a reset token without binding it to a password hash. Used by the
/// link-validation endpoint, which only knows the token.
pub fn decode_reset_token(keys: &JwtKeys, token: &str) -> Result<ResetClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let decoded = match decode::<ResetClaims>(token, keys.decoding_key(), &validation) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => return Err(AuthError::Expired),
            _ => {
                return Err(AuthError::ValidationFailed {
                    details: e.to_string(),
                });
            }
        },
    };

    if decoded.purpose != RESET_PURPOSE {
        return Err(AuthError::WrongTokenType);
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::test_user;

    #[test]
    fn reset_token_round_trips() {
        let keys = JwtKeys::new("test-secret");
        let mut user = test_user();
        user.password_hash = "$argon2id$v=19$m=19456,t=2,p=1$abcdef$0123456789".to_string();

        let token = issue_reset_token(&keys, &user).unwrap();
        let claims = validate_reset_token(&keys, &token, &user.password_hash).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
    }

    #[test]
    fn reset_token_dies_with_the_password() {
        let keys = JwtKeys::new("test-secret");
        let mut user = test_user();
        user.password_hash = "$argon2id$v=19$m=19456,t=2,p=1$abcdef$0123456789".to_string();

        let token = issue_reset_token(&keys, &user).unwrap();
        let changed = "$argon2id$v=19$m=19456,t=2,p=1$ghijkl$9876543210";
        assert!(validate_reset_token(&keys, &token, changed).is_err());
    }

    #[test]
    fn access_token_is_not_a_reset_token() {
        let keys = JwtKeys::new("test-secret");
        let user = test_user();
        let pair = keys.issue_pair(&user).unwrap();
        assert!(decode_reset_token(&keys, &pair.access).is_err());
    }
}
