//! AppError

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error surfaced to the console layer
///
/// Domain errors (`TableValidationError`, `FlowError`, ...) convert into this
/// type at the edge. `details` carries structured context such as the
/// offending field or id.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error carrying the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref()?.get(key)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, message)
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::CartEmpty);
        assert_eq!(err.code, ErrorCode::CartEmpty);
        assert_eq!(err.message, "Cart is empty");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_details() {
        let err = AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", "burger-9");
        assert_eq!(err.to_string(), "Menu item not found");
        assert_eq!(err.detail("id"), Some(&Value::from("burger-9")));
        assert_eq!(err.detail("field"), None);
    }

    #[test]
    fn test_json_shape() {
        let err = AppError::validation("name must not be empty");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], 2);
        assert_eq!(json["message"], "name must not be empty");
        assert!(json.get("details").is_none());

        let back: AppError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
