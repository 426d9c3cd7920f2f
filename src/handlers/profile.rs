use crate::models::ProfileRecord;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Return the fixed profile.
///
/// ## Route
/// GET /
///
/// ## Response
/// ```json
/// { "name": "Ashim", "age": 19, "skills": "MERN" }
/// ```
///
/// Any request body is ignored, and the gate never blocks this route.
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileRecord> {
    Json(state.profile.as_ref().clone())
}
