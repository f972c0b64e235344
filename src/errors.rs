use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,

    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// Stable machine-readable code used in the JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NoAuthHeader => "no_auth_header",
            AuthError::MalformedHeader => "malformed_header",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": "authentication_error",
                "code": self.code(),
            }
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
