use axum::http::HeaderMap;

use crate::errors::AuthError;

/// Scheme token expected at the front of the `Authorization` header value.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from an `Authorization: ApiKey <key>` header.
///
/// The value is split on the first space only; everything after it is the
/// key, embedded spaces included. No trimming.
///
/// Errors:
/// - [`AuthError::NoAuthHeader`]: header absent or empty.
/// - [`AuthError::MalformedHeader`]: wrong scheme, no key after the
///   scheme, or a value that is not valid visible ASCII.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = headers.get("authorization").ok_or(AuthError::NoAuthHeader)?;

    // Present but unreadable counts as malformed, not missing.
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let (scheme, key) = value.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    if scheme != API_KEY_SCHEME || key.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(key.to_string())
}
