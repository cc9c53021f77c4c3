use serde::{Deserialize, Serialize};
use std::fmt;

/// Ошибка валидации, привязанная к полю формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Набор ошибок валидации формы (в порядке полей)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn first_message(&self) -> Option<&str> {
        self.0.first().map(|e| e.message.as_str())
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    // ------------------------------------------------------------------
    // Rule helpers
    // ------------------------------------------------------------------

    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }

    /// Minimum length in characters, counted on the trimmed value
    pub fn min_chars(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.push(field, message);
        }
    }

    pub fn max_chars(&mut self, field: &str, value: &str, max: usize, message: &str) {
        if value.trim().chars().count() > max {
            self.push(field, message);
        }
    }

    pub fn positive_id(&mut self, field: &str, value: i32, message: &str) {
        if value <= 0 {
            self.push(field, message);
        }
    }

    pub fn non_negative(&mut self, field: &str, value: i64, message: &str) {
        if value < 0 {
            self.push(field, message);
        }
    }

    /// Optional e-mail: empty is fine, otherwise needs `local@domain`
    pub fn email(&mut self, field: &str, value: &str, message: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let valid = match value.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
            None => false,
        };
        if !valid {
            self.push(field, message);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Формы, которые проверяются до отправки на сервер и повторно на сервере
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Empty or whitespace-only strings become `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_collect_in_order() {
        let mut errors = ValidationErrors::new();
        errors.require("name", "   ", "Nome é obrigatório");
        errors.min_chars("code", "B", 2, "curto");
        errors.max_chars("code", "BRAS", 3, "longo");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("Nome é obrigatório"));
        assert_eq!(errors.get("code"), Some("curto"));
        assert_eq!(errors.first_message(), Some("Nome é obrigatório"));
        assert_eq!(errors.to_string(), "Nome é obrigatório; curto; longo");
    }

    #[test]
    fn test_empty_is_ok() {
        let mut errors = ValidationErrors::new();
        errors.require("name", "Lancha", "x");
        errors.email("contactEmail", "", "x");
        errors.non_negative("price", 0, "x");
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_email_rule() {
        let mut errors = ValidationErrors::new();
        errors.email("a", "marina@porto.com.br", "bad");
        assert!(errors.is_empty());
        errors.email("b", "marina.porto.com", "bad");
        errors.email("c", "@porto.com", "bad");
        errors.email("d", "marina@localhost", "bad");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_serializes_as_list() {
        let mut errors = ValidationErrors::new();
        errors.push("code", "inválido");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"[{"field":"code","message":"inválido"}]"#);
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  ".into())), None);
        assert_eq!(normalize_optional(Some(" Búzios ".into())), Some("Búzios".into()));
        assert_eq!(normalize_optional(None), None);
    }
}
