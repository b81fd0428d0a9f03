use axum::{async_trait, extract::FromRequestParts, http::request::Parts, http::StatusCode};
use model::user::UserRole;

/// The authenticated caller, decoded from the access token by
/// [crate::middleware::decode_jwt].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    pub is_staff: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or((StatusCode::UNAUTHORIZED, "not authenticated".to_string()))
    }
}

/// Identity when present, None otherwise. For endpoints that behave
/// differently for authenticated callers but stay public.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<AuthUser>().cloned()))
    }
}

/// Staff-only identity. 401 without a token, 403 for non-staff accounts.
#[derive(Debug, Clone)]
pub struct Staff(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for Staff
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_staff {
            return Err((StatusCode::FORBIDDEN, "not authorized".to_string()));
        }
        Ok(Staff(user))
    }
}
