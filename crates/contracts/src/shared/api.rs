use serde::{Deserialize, Serialize};

use crate::domain::common::FieldError;

/// Тело ответа с ошибкой (любой не-2xx ответ backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: Vec::new(),
        }
    }
}

/// `{success, message}` acknowledgement used by the password-recovery flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_without_fields_omits_them() {
        let json = serde_json::to_string(&ErrorResponse::new("Não autenticado")).unwrap();
        assert_eq!(json, r#"{"message":"Não autenticado"}"#);
        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert!(parsed.fields.is_empty());
    }
}
