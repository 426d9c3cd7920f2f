use crate::error::{AppError, AppResult};
use crate::gate::{Decision, Gate};
use crate::models::SubmissionPayload;
use crate::state::AppState;
use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;

/// Largest body the gate will buffer (same default as common JSON body parsers)
pub const BODY_LIMIT: usize = 100 * 1024;

/// Shared-secret check in front of the `/` handlers.
///
/// Reads pass straight through. For anything else the body is buffered,
/// parsed, and handed to the gate; on `Allow` the same bytes are put back
/// so the handler sees the request exactly as the client sent it.
pub async fn require_password(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    if Gate::is_read(request.method()) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT).await.map_err(body_read_error)?;

    let payload = parse_payload(&parts.headers, &bytes)?;

    match state.gate.check(&parts.method, Some(&payload)) {
        Decision::Allow => {
            let request = Request::from_parts(parts, Body::from(bytes));
            Ok(next.run(request).await)
        }
        Decision::Deny => {
            // Never log the payload here: it holds the attempted secret
            tracing::warn!(method = %parts.method, uri = %parts.uri, "write request denied");
            Err(AppError::Unauthorized)
        }
    }
}

/// Over-limit bodies are a 413; any other read failure is a 400.
fn body_read_error(err: axum::Error) -> AppError {
    let inner = err.into_inner();
    if inner.is::<LengthLimitError>() {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(format!("failed to read request body: {inner}"))
    }
}

/// Turn the raw body into a payload the gate can inspect.
///
/// Bodies that are empty or not declared as JSON are treated as having no
/// fields at all; malformed JSON is a 400. Valid JSON that is not an object
/// (`"123456"`, `[..]`, `42`) also has no fields, so a write is denied with 401.
fn parse_payload(headers: &HeaderMap, bytes: &Bytes) -> AppResult<SubmissionPayload> {
    if bytes.is_empty() || !is_json(headers) {
        return Ok(SubmissionPayload::default());
    }

    let value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {e}")))?;
    Ok(SubmissionPayload::from_value(value))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn json_content_type_is_detected() {
        assert!(is_json(&json_headers()));

        let mut text = HeaderMap::new();
        text.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!is_json(&text));
        assert!(!is_json(&HeaderMap::new()));
    }

    #[test]
    fn non_json_bodies_have_no_fields() {
        let bytes = Bytes::from_static(br#"{"password":"123456"}"#);
        let payload = parse_payload(&HeaderMap::new(), &bytes).unwrap();
        assert!(payload.get("password").is_none());
    }

    #[test]
    fn empty_json_body_has_no_fields() {
        let payload = parse_payload(&json_headers(), &Bytes::new()).unwrap();
        assert_eq!(payload, SubmissionPayload::default());
    }

    #[test]
    fn malformed_json_is_a_bad_request() {
        let bytes = Bytes::from_static(b"{\"password\":");
        let err = parse_payload(&json_headers(), &bytes).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
