//! # Student Update Routes
//!
//! Provides the endpoint for editing an existing student:
//! - `PUT /student`

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ApiResponse;
use crate::routes::students::common::{
    invalid_fields_response, missing_fields_response, student_error_response, StudentPayload,
    StudentResponse, UpdateStudentRequest,
};
use crate::state::AppState;

/// PUT /student
///
/// Applies a partial update to the student selected by `matricula`. Only the
/// fields present in the body change; the matricula itself is never
/// rewritten. A new photo URL is downloaded and re-encoded before the record
/// is touched.
///
/// ### Request Body
/// ```json
/// {
///   "data": {
///     "matricula": "20231BSI012",
///     "attendance": 3
///   }
/// }
/// ```
///
/// ### Responses
/// - `200 OK` — the updated record
/// - `422 Unprocessable Entity` — `data` absent, or per-field validation issues
/// - `404 Not Found` — no student with that matricula
/// - `400 Bad Request` — unreachable photo or bytes that are not a JPEG/PNG image
pub async fn update_student(
    State(app_state): State<AppState>,
    Json(payload): Json<StudentPayload<UpdateStudentRequest>>,
) -> Response {
    let Some(request) = payload.data else {
        return missing_fields_response();
    };

    let input = match request.into_input() {
        Ok(input) => input,
        Err(issues) => return invalid_fields_response(issues),
    };

    match app_state.students().update(input).await {
        Ok(student) => {
            let message = format!("Student {} updated successfully", student.matricula);
            (
                StatusCode::OK,
                Json(ApiResponse::success(StudentResponse::from(student), message)),
            )
                .into_response()
        }
        Err(err) => student_error_response(err),
    }
}
