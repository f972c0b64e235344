use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AuthError;
use crate::headers::extract_api_key;

/// Extractor handing the request's API key to a handler.
///
/// Rejects with [`AuthError`] (401 + JSON body) when the header is missing
/// or malformed, so handlers only ever see a non-empty key:
///
/// ```ignore
/// async fn whoami(ApiKey(key): ApiKey) -> String {
///     format!("authenticated with {key}")
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match extract_api_key(&parts.headers) {
            Ok(key) => Ok(ApiKey(key)),
            Err(err) => {
                // Log the kind only; the header value may hold a credential.
                tracing::warn!(code = err.code(), "rejected request: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header("authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_extracts_key() {
        let mut parts = parts_with_auth(Some("ApiKey abc123"));
        let key = ApiKey::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(key, ApiKey("abc123".to_string()));
    }

    #[tokio::test]
    async fn test_rejects_missing_header() {
        let mut parts = parts_with_auth(None);
        let err = ApiKey::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::NoAuthHeader);
    }

    #[tokio::test]
    async fn test_rejects_wrong_scheme() {
        let mut parts = parts_with_auth(Some("Bearer abc123"));
        let err = ApiKey::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::MalformedHeader);
    }
}
