use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::errors::AuthError;
use crate::headers::extract_api_key;

/// API key carried in request extensions after [`require_api_key`] ran.
#[derive(Debug, Clone)]
pub struct RequestApiKey(pub String);

/// Middleware: rejects any request without a well-formed
/// `Authorization: ApiKey <key>` header.
///
/// On success the key is stored in the request extensions as
/// [`RequestApiKey`], so downstream handlers and layers can look it up
/// without re-parsing the header:
///
/// ```ignore
/// let protected = routes.layer(middleware::from_fn(require_api_key));
/// ```
pub async fn require_api_key(mut req: Request, next: Next) -> Result<Response, AuthError> {
    let key = match extract_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                code = err.code(),
                method = %req.method(),
                path = %req.uri().path(),
                "rejected request: {err}"
            );
            return Err(err);
        }
    };

    req.extensions_mut().insert(RequestApiKey(key));

    Ok(next.run(req).await)
}
