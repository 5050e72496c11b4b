//! # Student Search Routes
//!
//! Provides the endpoint for looking up a student:
//! - `GET /student`

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::routes::students::common::{
    invalid_fields_response, student_error_response, SearchStudentsQuery, StudentResponse,
    StudentSearchResponse,
};
use crate::state::AppState;

/// GET /student
///
/// Returns the first record matching every filter given as a query parameter,
/// or `null` when nothing matches. `matricula` and `name` match as
/// case-normalized substrings; `attendance` is validated as a number but does
/// not narrow the search.
///
/// ### Query Parameters
/// - `matricula` (optional)
/// - `name` (optional)
/// - `attendance` (optional, must be numeric)
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "student": { "matricula": "20231BSI012", "name": "Ana Clara", ... } }
/// ```
/// or `{ "student": null }`
/// - `422 Unprocessable Entity` — non-numeric `attendance`
pub async fn search_student(
    State(app_state): State<AppState>,
    Query(query): Query<SearchStudentsQuery>,
) -> Response {
    let filters = match query.into_filters() {
        Ok(filters) => filters,
        Err(issues) => return invalid_fields_response(issues),
    };

    match app_state.students().search(filters).await {
        Ok(student) => (
            StatusCode::OK,
            Json(StudentSearchResponse {
                student: student.map(StudentResponse::from),
            }),
        )
            .into_response(),
        Err(err) => student_error_response(err),
    }
}
