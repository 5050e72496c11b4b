use serde::Serialize;
use validator::ValidationErrors;

/// A single field-level validation failure, as surfaced in 422 responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Flattens `ValidationErrors` into one issue per violated rule, sorted by
/// field name so response bodies are deterministic.
pub fn field_issues(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldIssue {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Field {field} is invalid.")),
            })
        })
        .collect();
    issues.sort_by(|a, b| a.field.cmp(&b.field));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "Field name must not be empty."))]
        name: String,
        #[validate(url(message = "Field photo must be filled with valid url."))]
        photo: String,
    }

    #[test]
    fn collects_one_issue_per_violated_rule() {
        let form = Form {
            name: "".into(),
            photo: "not-a-url".into(),
        };
        let errors = form.validate().unwrap_err();
        let issues = field_issues(&errors);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "name");
        assert_eq!(issues[0].message, "Field name must not be empty.");
        assert_eq!(issues[1].field, "photo");
        assert_eq!(issues[1].message, "Field photo must be filled with valid url.");
    }

    #[test]
    fn valid_input_produces_no_issues() {
        let form = Form {
            name: "Ana".into(),
            photo: "https://example.com/ana.jpg".into(),
        };
        assert!(form.validate().is_ok());
    }
}
