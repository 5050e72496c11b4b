//! # Student Registration Routes
//!
//! Provides the endpoint for registering a new student:
//! - `POST /student`

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ApiResponse;
use crate::routes::students::common::{
    invalid_fields_response, missing_fields_response, student_error_response,
    CreateStudentRequest, StudentPayload, StudentResponse,
};
use crate::state::AppState;

/// POST /student
///
/// Registers a student. The matricula is canonicalized to uppercase and must
/// be unique; the name is title-cased; the photo is downloaded from the given
/// URL and stored base64-encoded.
///
/// ### Request Body
/// ```json
/// {
///   "data": {
///     "matricula": "20231BSI012",
///     "name": "ana clara e silva",
///     "photo": "https://example.com/ana.jpg",
///     "attendance": 0
///   }
/// }
/// ```
///
/// ### Responses
/// - `200 OK` — the stored record
/// - `422 Unprocessable Entity` — `data` absent, or per-field validation issues
/// - `400 Bad Request` — duplicate matricula, unreachable photo, or bytes that
///   are not a JPEG/PNG image
pub async fn register_student(
    State(app_state): State<AppState>,
    Json(payload): Json<StudentPayload<CreateStudentRequest>>,
) -> Response {
    let Some(request) = payload.data else {
        return missing_fields_response();
    };

    let input = match request.into_input() {
        Ok(input) => input,
        Err(issues) => return invalid_fields_response(issues),
    };

    match app_state.students().register(input).await {
        Ok(student) => {
            let message = format!("Student {} registered successfully", student.matricula);
            (
                StatusCode::OK,
                Json(ApiResponse::success(StudentResponse::from(student), message)),
            )
                .into_response()
        }
        Err(err) => student_error_response(err),
    }
}
