//! # Error Handling
//!
//! This module defines the application error type and how each error is
//! turned into an HTTP response.
//!
//! Unlike most JSON APIs, every error here is answered with a short
//! **plain-text** body. Clients tell a rejection apart from a success by the
//! status code and by the fact that the body is not JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type
///
/// ## The `#[derive(Error)]` macro
/// The `thiserror::Error` derive macro implements `std::error::Error` and
/// `Display` (using the `#[error(...)]` messages).
#[derive(Error, Debug)]
pub enum AppError {
    /// The request gate denied a write request (401)
    ///
    /// Carries no detail on purpose: the attempted secret must never end up
    /// in a message or a log line.
    #[error("Unauthorized")]
    Unauthorized,

    /// The request came from a browser origin other than the configured one (403)
    #[error("Forbidden")]
    Forbidden,

    /// The body could not be read or parsed as JSON (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The body is larger than the gate is willing to buffer (413)
    #[error("Payload Too Large")]
    PayloadTooLarge,
}

impl AppError {
    /// HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

/// Convert AppError into an HTTP response
///
/// Axum handlers and middleware can return `Result<T, AppError>` and have
/// errors converted into a status code plus a `text/plain` body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = self.to_string();

        // A `String` body makes axum set `content-type: text/plain; charset=utf-8`
        (self.status(), body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    async fn render(err: AppError) -> (StatusCode, String, String) {
        let response = err.into_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn unauthorized_is_plain_text_401() {
        let (status, content_type, body) = render(AppError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, "Unauthorized");
    }

    #[tokio::test]
    async fn forbidden_is_plain_text_403() {
        let (status, _, body) = render(AppError::Forbidden).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, "Forbidden");
    }

    #[tokio::test]
    async fn bad_request_carries_its_reason() {
        let (status, _, body) = render(AppError::BadRequest("expected value".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Bad request: expected value");
    }

    #[tokio::test]
    async fn payload_too_large_is_413() {
        let (status, _, body) = render(AppError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, "Payload Too Large");
    }
}
