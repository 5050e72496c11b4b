//! Shared request/response types and helpers for the `/student` route group.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use common::validation::{field_issues, FieldIssue};
use db::models::student;
use services::student::{RegisterStudent, SearchStudents, UpdateStudent};
use services::StudentError;

use crate::response::{ApiResponse, Empty};

lazy_static::lazy_static! {
    /// UFU matriculas for Information Systems: five digits, the BSI course
    /// code, then the sequence number. Stored uppercase, matched either case.
    static ref MATRICULA_REGEX: regex::Regex =
        regex::Regex::new(r"(?i)^\d{5}BSI\d+$").unwrap();
}

/// Body wrapper every mutating endpoint expects: `{"data": { ... }}`.
///
/// `data` stays optional so a body without it yields the dedicated
/// "Missing some fields." response instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct StudentPayload<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(
        required(message = "Field matricula must compose request body."),
        length(equal = 11, message = "Field matricula must be 11 characters long."),
        regex(
            path = &*MATRICULA_REGEX,
            message = "Field matricula must match UFU's pattern for Information System students."
        )
    )]
    pub matricula: Option<String>,

    #[validate(
        required(message = "Field name must compose request body."),
        length(min = 1, message = "Field name must not be empty.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Field photo must compose request body."),
        url(message = "Field photo must be filled with valid url.")
    )]
    pub photo: Option<String>,

    #[validate(required(message = "Field attendance must compose request body."))]
    pub attendance: Option<i32>,
}

impl CreateStudentRequest {
    /// Validates the request and converts it into service input.
    pub fn into_input(self) -> Result<RegisterStudent, Vec<FieldIssue>> {
        if let Err(errors) = self.validate() {
            return Err(field_issues(&errors));
        }
        let (Some(matricula), Some(name), Some(photo), Some(attendance)) =
            (self.matricula, self.name, self.photo, self.attendance)
        else {
            return Err(vec![FieldIssue {
                field: "data".to_string(),
                message: "Missing some fields.".to_string(),
            }]);
        };
        Ok(RegisterStudent {
            matricula,
            name,
            photo,
            attendance,
        })
    }
}

/// Update payload: `matricula` selects the record and is mandatory, every
/// other field is applied only when present.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(
        required(message = "Field matricula must compose request body."),
        length(equal = 11, message = "Field matricula must be 11 characters long."),
        regex(
            path = &*MATRICULA_REGEX,
            message = "Field matricula must match UFU's pattern for Information System students."
        )
    )]
    pub matricula: Option<String>,

    #[validate(length(min = 1, message = "Field name must not be empty."))]
    pub name: Option<String>,

    #[validate(url(message = "Field photo must be filled with valid url."))]
    pub photo: Option<String>,

    pub attendance: Option<i32>,
}

impl UpdateStudentRequest {
    pub fn into_input(self) -> Result<UpdateStudent, Vec<FieldIssue>> {
        if let Err(errors) = self.validate() {
            return Err(field_issues(&errors));
        }
        let Some(matricula) = self.matricula else {
            return Err(vec![FieldIssue {
                field: "matricula".to_string(),
                message: "Field matricula must compose request body.".to_string(),
            }]);
        };
        Ok(UpdateStudent {
            matricula,
            name: self.name,
            photo: self.photo,
            attendance: self.attendance,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RemoveStudentRequest {
    #[validate(
        required(message = "Field matricula must compose request body."),
        length(equal = 11, message = "Field matricula must be 11 characters long."),
        regex(
            path = &*MATRICULA_REGEX,
            message = "Field matricula must match UFU's pattern for Information System students."
        )
    )]
    pub matricula: Option<String>,
}

impl RemoveStudentRequest {
    pub fn into_matricula(self) -> Result<String, Vec<FieldIssue>> {
        if let Err(errors) = self.validate() {
            return Err(field_issues(&errors));
        }
        let Some(matricula) = self.matricula else {
            return Err(vec![FieldIssue {
                field: "matricula".to_string(),
                message: "Field matricula must compose request body.".to_string(),
            }]);
        };
        Ok(matricula)
    }
}

/// Query parameters for GET /student. Everything arrives as text; the
/// attendance value must still parse as an integer even though the search
/// itself only filters on matricula and name.
#[derive(Debug, Deserialize)]
pub struct SearchStudentsQuery {
    pub matricula: Option<String>,
    pub name: Option<String>,
    pub attendance: Option<String>,
}

impl SearchStudentsQuery {
    pub fn into_filters(self) -> Result<SearchStudents, Vec<FieldIssue>> {
        let attendance = match self.attendance {
            Some(raw) => match raw.parse::<i32>() {
                Ok(value) => Some(value),
                Err(_) => {
                    return Err(vec![FieldIssue {
                        field: "attendance".to_string(),
                        message: "Field attendance must be a number.".to_string(),
                    }]);
                }
            },
            None => None,
        };
        Ok(SearchStudents {
            matricula: self.matricula,
            name: self.name,
            attendance,
        })
    }
}

/// Public shape of a student record. Internal ids and timestamps stay out
/// of API responses.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub matricula: String,
    pub name: String,
    pub photo: String,
    pub attendance: i32,
}

impl From<student::Model> for StudentResponse {
    fn from(model: student::Model) -> Self {
        Self {
            matricula: model.matricula,
            name: model.name,
            photo: model.photo,
            attendance: model.attendance,
        }
    }
}

/// GET /student success body: the first matching record, or `null`.
#[derive(Debug, Serialize)]
pub struct StudentSearchResponse {
    pub student: Option<StudentResponse>,
}

/// 422 for bodies whose `data` wrapper is absent.
pub fn missing_fields_response() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::<Empty>::error("Missing some fields.")),
    )
        .into_response()
}

/// 422 carrying the per-field issue list.
pub fn invalid_fields_response(issues: Vec<FieldIssue>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::<Empty>::invalid(issues)),
    )
        .into_response()
}

/// Maps a service error to its status code and message body. Database
/// failures are logged here and reported as a plain 500.
pub fn student_error_response(err: StudentError) -> Response {
    let status = match &err {
        StudentError::AlreadyRegistered { .. }
        | StudentError::PhotoFetch(_)
        | StudentError::UnsupportedImage => StatusCode::BAD_REQUEST,
        StudentError::NotFound { .. } => StatusCode::NOT_FOUND,
        StudentError::Db(db_err) => {
            tracing::error!(error = %db_err, "student operation hit a database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::<Empty>::error(err.to_string()))).into_response()
}
