//! Greeting input validation. Messages follow the wording the web client already displays.

use crate::error::AppError;
use crate::schema::InsertGreeting;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Check a raw JSON body against the greeting input shape. Fields are checked in
    /// declaration order and the first violation wins.
    pub fn greeting(body: &Value) -> Result<InsertGreeting, AppError> {
        let obj = body.as_object().ok_or_else(|| {
            AppError::BadRequest(format!("Expected object, received {}", type_name(body)))
        })?;
        let name = non_empty_string("name", obj.get("name"))?;
        let message = non_empty_string("message", obj.get("message"))?;
        Ok(InsertGreeting { name, message })
    }
}

fn non_empty_string(field: &str, value: Option<&Value>) -> Result<String, AppError> {
    match value {
        None => Err(AppError::validation("Required", field)),
        Some(Value::String(s)) if s.is_empty() => Err(AppError::validation(
            "String must contain at least 1 character(s)",
            field,
        )),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(AppError::validation(
            format!("Expected string, received {}", type_name(other)),
            field,
        )),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violation(body: Value) -> (String, Option<String>) {
        match RequestValidator::greeting(&body) {
            Err(AppError::Validation { message, field }) => (message, field),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_non_empty_strings() {
        let input = RequestValidator::greeting(&json!({"name": "A", "message": "B"})).unwrap();
        assert_eq!(input, InsertGreeting::new("A", "B"));
    }

    #[test]
    fn ignores_unknown_fields() {
        let input =
            RequestValidator::greeting(&json!({"name": "A", "message": "B", "id": 9})).unwrap();
        assert_eq!(input, InsertGreeting::new("A", "B"));
    }

    #[test]
    fn empty_name_points_at_name() {
        let (message, field) = violation(json!({"name": "", "message": "hi"}));
        assert_eq!(message, "String must contain at least 1 character(s)");
        assert_eq!(field.as_deref(), Some("name"));
    }

    #[test]
    fn name_is_checked_before_message() {
        let (_, field) = violation(json!({"message": ""}));
        assert_eq!(field.as_deref(), Some("name"));
    }

    #[test]
    fn missing_field_is_required() {
        let (message, field) = violation(json!({"name": "A"}));
        assert_eq!((message.as_str(), field.as_deref()), ("Required", Some("message")));
    }

    #[test]
    fn explicit_null_is_a_type_mismatch() {
        let (message, field) = violation(json!({"name": null, "message": "hi"}));
        assert_eq!(message, "Expected string, received null");
        assert_eq!(field.as_deref(), Some("name"));
    }

    #[test]
    fn wrong_type_names_the_received_type() {
        let (message, field) = violation(json!({"name": "A", "message": 5}));
        assert_eq!(message, "Expected string, received number");
        assert_eq!(field.as_deref(), Some("message"));
    }

    #[test]
    fn non_object_body_is_a_bad_request() {
        match RequestValidator::greeting(&json!([1, 2])) {
            Err(AppError::BadRequest(message)) => {
                assert_eq!(message, "Expected object, received array")
            }
            other => panic!("expected bad request, got {:?}", other),
        }
    }
}
