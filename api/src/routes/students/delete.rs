//! # Student Removal Routes
//!
//! Provides the endpoint for removing a student:
//! - `DELETE /student` (admin only)

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ApiResponse;
use crate::routes::students::common::{
    invalid_fields_response, missing_fields_response, student_error_response,
    RemoveStudentRequest, StudentPayload, StudentResponse,
};
use crate::state::AppState;

/// DELETE /student
///
/// Removes the student selected by `matricula` and returns the record as it
/// was stored. Requires a bearer token with the admin capability; the guard
/// rejects the request before this handler runs.
///
/// ### Request Body
/// ```json
/// { "data": { "matricula": "20231BSI012" } }
/// ```
///
/// ### Responses
/// - `200 OK` — the removed record
/// - `401 Unauthorized` — missing or invalid token
/// - `403 Forbidden` — token without the admin capability
/// - `422 Unprocessable Entity` — `data` absent, or matricula issues
/// - `404 Not Found` — no student with that matricula
pub async fn remove_student(
    State(app_state): State<AppState>,
    Json(payload): Json<StudentPayload<RemoveStudentRequest>>,
) -> Response {
    let Some(request) = payload.data else {
        return missing_fields_response();
    };

    let matricula = match request.into_matricula() {
        Ok(matricula) => matricula,
        Err(issues) => return invalid_fields_response(issues),
    };

    match app_state.students().remove(&matricula).await {
        Ok(student) => {
            let message = format!("Student {} removed successfully", student.matricula);
            (
                StatusCode::OK,
                Json(ApiResponse::success(StudentResponse::from(student), message)),
            )
                .into_response()
        }
        Err(err) => student_error_response(err),
    }
}
