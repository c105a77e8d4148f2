use crate::api::{ApiError, ApiResponse};
use serde_json::Value;
use thiserror::Error;

use super::flow::FieldSpec;

/// Keys of a validation body that never reach the screen
const HIDDEN_KEYS: &[&str] = &["detail", "error", "non_field_errors"];

/// A message attached to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Why a submission did not succeed.
///
/// Every variant is shown to the user as the same generic banner; the
/// variant itself is for logs and for field hints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitFailure {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("server responded with status {status}")]
    Rejected { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("could not save session: {0}")]
    Storage(String),
}

impl SubmitFailure {
    /// Classify a non-success response
    pub fn from_response(response: &ApiResponse, fields: &[FieldSpec]) -> Self {
        if response.status == 400 {
            let errors = parse_field_errors(&response.data, fields);
            if !errors.is_empty() {
                return SubmitFailure::Validation(errors);
            }
        }
        SubmitFailure::Rejected {
            status: response.status,
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            SubmitFailure::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Hint for one field, if the server reported one
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl From<ApiError> for SubmitFailure {
    fn from(err: ApiError) -> Self {
        SubmitFailure::Transport(err.to_string())
    }
}

/// Pull per-field messages out of a validation body such as
/// `{"email": ["Enter a valid email address."]}`.
///
/// Only keys naming a form field are kept, in form order.
pub fn parse_field_errors(data: &Value, fields: &[FieldSpec]) -> Vec<FieldError> {
    let Some(object) = data.as_object() else {
        return Vec::new();
    };

    fields
        .iter()
        .filter(|spec| !HIDDEN_KEYS.contains(&spec.name))
        .filter_map(|spec| {
            let message = match object.get(spec.name)? {
                Value::String(s) => s.clone(),
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(" "),
                _ => return None,
            };
            let message = message.trim().to_string();
            if message.is_empty() {
                return None;
            }
            Some(FieldError {
                field: spec.name.to_string(),
                message,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::flow::{AuthFlow, RegisterFlow};
    use serde_json::json;

    fn response(status: u16, data: Value) -> ApiResponse {
        ApiResponse { status, data }
    }

    #[test]
    fn test_validation_body_maps_to_fields() {
        let failure = SubmitFailure::from_response(
            &response(
                400,
                json!({
                    "password": ["This password is too short.", "It must contain at least 8 characters."],
                    "email": "Enter a valid email address.",
                    "non_field_errors": ["Passwords do not match"]
                }),
            ),
            RegisterFlow::fields(),
        );

        assert_eq!(failure.field_errors().len(), 2);
        assert_eq!(failure.field_errors()[0].field, "email");
        assert_eq!(
            failure.field_error("password"),
            Some("This password is too short. It must contain at least 8 characters.")
        );
        assert_eq!(failure.field_error("username"), None);
    }

    #[test]
    fn test_detail_only_body_is_rejected() {
        let failure = SubmitFailure::from_response(
            &response(400, json!({"detail": "invalid credentials"})),
            RegisterFlow::fields(),
        );
        assert_eq!(failure, SubmitFailure::Rejected { status: 400 });
        assert!(failure.field_errors().is_empty());
    }

    #[test]
    fn test_field_errors_only_read_from_400() {
        let failure = SubmitFailure::from_response(
            &response(500, json!({"email": ["boom"]})),
            RegisterFlow::fields(),
        );
        assert_eq!(failure, SubmitFailure::Rejected { status: 500 });
    }

    #[test]
    fn test_non_object_bodies() {
        let fields = RegisterFlow::fields();
        assert!(parse_field_errors(&Value::Null, fields).is_empty());
        assert!(parse_field_errors(&json!(["email"]), fields).is_empty());
        assert!(parse_field_errors(&json!({"email": 3}), fields).is_empty());
        assert!(parse_field_errors(&json!({"email": [""]}), fields).is_empty());
    }

    #[test]
    fn test_transport_error_conversion() {
        let failure: SubmitFailure = ApiError::Transport("connection refused".into()).into();
        assert!(matches!(failure, SubmitFailure::Transport(ref msg) if msg.contains("connection refused")));
    }
}
