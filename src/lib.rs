//! API key extraction for the `Authorization: ApiKey <key>` convention.
//!
//! The core is [`headers::extract_api_key`], a pure function from a header
//! map to a key or a typed [`errors::AuthError`]. The [`extract`] and
//! [`middleware`] modules wrap it for axum handlers and routers; neither
//! adds parsing rules of its own. Verifying the key against anything is the
//! caller's business.

pub mod errors;
pub mod extract;
pub mod headers;
pub mod middleware;

pub use errors::AuthError;
pub use extract::ApiKey;
pub use headers::{extract_api_key, API_KEY_SCHEME};
pub use middleware::{require_api_key, RequestApiKey};
