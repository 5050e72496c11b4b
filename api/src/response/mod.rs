use common::validation::FieldIssue;
use serde::Serialize;

/// Envelope shared by every JSON endpoint except the search route, which
/// returns its record bare.
///
/// ```json
/// {
///   "success": true,
///   "data": { "matricula": "20231BSI012", "name": "Ana Silva", ... },
///   "message": "Student 20231BSI012 registered successfully"
/// }
/// ```
///
/// Validation failures additionally carry an `errors` array with one entry
/// per violated field rule; everywhere else the field is omitted from the
/// serialized body.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldIssue>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            errors: None,
        }
    }

    /// Failure body with default `data`; backs every non-2xx arm that is not
    /// a validation failure.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
            errors: None,
        }
    }

    /// Validation-failure body: the issues travel in `errors`, and `message`
    /// joins their texts with `"; "` for clients that only show one string.
    pub fn invalid(issues: Vec<FieldIssue>) -> Self
    where
        T: Default,
    {
        let message = issues
            .iter()
            .map(|issue| issue.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            success: false,
            data: T::default(),
            message,
            errors: Some(issues),
        }
    }
}

/// Serializes as `null`; the `data` payload of responses that carry none.
#[derive(Serialize, Default)]
pub struct Empty;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_bodies_omit_the_errors_field() {
        let body = serde_json::to_value(ApiResponse::<Empty>::error("boom")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], serde_json::Value::Null);
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn invalid_bodies_join_issue_messages() {
        let issues = vec![
            FieldIssue {
                field: "matricula".to_string(),
                message: "Field matricula must be 11 characters long.".to_string(),
            },
            FieldIssue {
                field: "name".to_string(),
                message: "Field name must not be empty.".to_string(),
            },
        ];
        let body = serde_json::to_value(ApiResponse::<Empty>::invalid(issues)).unwrap();
        assert_eq!(
            body["message"],
            "Field matricula must be 11 characters long.; Field name must not be empty."
        );
        assert_eq!(body["errors"][1]["field"], "name");
    }
}
