//! # Submission Handler
//!
//! Echoes a submitted form back to the caller.

use crate::models::SubmissionPayload;
use axum::Json;

/// Echo the submitted fields back unchanged
///
/// ## Route
/// POST /
///
/// ## Request / Response
/// ```json
/// { "userName": "Alice", "email": "a@x.com", "age": "30", "password": "123456" }
/// ```
/// The response body is the request body, field for field.
///
/// ## About the password field
/// The `password` field is echoed back too. That is a faithful reproduction
/// of the behavior this server mirrors and is **not** something to copy into
/// a real service: a credential should never be reflected in a response.
///
/// ## Authentication
/// Protected by the `require_password` middleware, which has already checked
/// the password before this runs.
pub async fn submit_form(Json(payload): Json<SubmissionPayload>) -> Json<SubmissionPayload> {
    // Field names only; values include the password
    tracing::debug!(fields = ?payload.field_names(), "form submitted");
    Json(payload)
}
