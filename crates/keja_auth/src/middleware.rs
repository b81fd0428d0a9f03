use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::claims::{JwtKeys, TokenKind};
use crate::extractors::AuthUser;
use crate::headers::extract_bearer_token;

/// Decodes the bearer token, when one is present, into an [AuthUser] request
/// extension. Requests without a token pass through untouched so public
/// endpoints keep working; handlers that need an identity use the extractors.
/// A token that is present but invalid is always a 401.
pub async fn decode_jwt(
    State(keys): State<JwtKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let token = extract_bearer_token(req.headers()).map_err(|e| {
        tracing::trace!(error = %e, "malformed authorization header");
        (StatusCode::UNAUTHORIZED, e.to_string())
    })?;

    if let Some(token) = token {
        let claims = keys.validate(&token, TokenKind::Access).map_err(|e| {
            tracing::trace!(error = %e, "access token rejected");
            (StatusCode::UNAUTHORIZED, e.to_string())
        })?;

        req.extensions_mut().insert(AuthUser {
            id: claims.sub,
            username: claims.username,
            role: claims.role,
            is_staff: claims.is_staff,
        });
    }

    Ok(next.run(req).await)
}
