//! Visitor token extraction.
//!
//! The catalog API authenticates visitors with a bearer token issued at login
//! and stored in a cookie. Login itself lives in a separate service; the
//! storefront only reads the cookie. Modeling the read as an extractor keeps
//! the fetch path testable without a real cookie store: handlers receive the
//! resolved credential, not the request.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts},
};
use secrecy::SecretString;

/// Name of the cookie carrying the visitor's bearer token.
pub const AUTH_COOKIE: &str = "jwt_token";

/// Extractor that reads the visitor's bearer token, if present.
///
/// Never rejects: a missing cookie yields `None` and the catalog fetch
/// proceeds unauthenticated (the upstream's 401 then collapses to the
/// failure view, the same place any other fetch failure lands).
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(token: VisitorToken) -> impl IntoResponse {
///     match token.secret() {
///         Some(_) => "authenticated fetch",
///         None => "anonymous fetch",
///     }
/// }
/// ```
pub struct VisitorToken(pub Option<SecretString>);

impl VisitorToken {
    /// The resolved token, if the cookie was present.
    #[must_use]
    pub fn secret(&self) -> Option<&SecretString> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for VisitorToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|header| cookie_value(header, AUTH_COOKIE))
            .map(SecretString::from);

        Ok(Self(token))
    }
}

/// Find a named cookie's value in a `Cookie` header.
fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Request;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_cookie_value_single() {
        assert_eq!(
            cookie_value("jwt_token=abc123", "jwt_token").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_cookie_value_among_many() {
        let header = "theme=dark; jwt_token=abc123; lang=en";
        assert_eq!(cookie_value(header, "jwt_token").as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cookie_value_missing() {
        assert_eq!(cookie_value("theme=dark; lang=en", "jwt_token"), None);
    }

    #[test]
    fn test_cookie_value_does_not_match_suffix() {
        assert_eq!(cookie_value("old_jwt_token=nope", "jwt_token"), None);
    }

    #[tokio::test]
    async fn test_extractor_reads_token_cookie() {
        let request = Request::builder()
            .header(COOKIE, "jwt_token=secret-token")
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let token = VisitorToken::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(
            token.secret().map(|s| s.expose_secret().to_string()),
            Some("secret-token".to_string())
        );
    }

    #[tokio::test]
    async fn test_extractor_without_cookie_yields_none() {
        let request = Request::builder().body(()).unwrap();
        let (mut parts, ()) = request.into_parts();

        let token = VisitorToken::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(token.secret().is_none());
    }
}
