use crate::error::AuthError;

/// Pulls the bearer token out of the Authorization header. Returns None when
/// the header is absent so public endpoints can pass through.
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<Option<String>, AuthError> {
    let Some(auth_header) = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
    else {
        tracing::trace!("no Authorization header provided");
        return Ok(None);
    };

    let parts = auth_header.split("Bearer ").collect::<Vec<&str>>();
    if parts.len() != 2 {
        return Err(AuthError::InvalidHeaderFormat);
    }

    Ok(Some(parts[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

    #[test]
    fn absent_header_is_none() {
        let headers = HeaderMap::new();
        assert!(extract_bearer_token(&headers).unwrap().is_none());
    }

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(
            extract_bearer_token(&headers).unwrap().as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn malformed_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Token abc"));
        assert!(matches!(
            extract_bearer_token(&headers),
            Err(AuthError::InvalidHeaderFormat)
        ));
    }
}
