//! Password recovery by CPF/CNPJ: request a code, verify it, reset.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryRequest {
    pub document: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryVerifyRequest {
    pub document: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryResetRequest {
    pub document: String,
    pub code: String,
    pub password: String,
}

pub const RECOVERY_CODE_LEN: usize = 6;

/// Keeps only the digits (`123.456.789-09` -> `12345678909`)
pub fn normalize_document(document: &str) -> String {
    document.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// CPF has 11 digits, CNPJ has 14
pub fn is_valid_document(document: &str) -> bool {
    matches!(normalize_document(document).len(), 11 | 14)
}

pub fn is_valid_code(code: &str) -> bool {
    code.len() == RECOVERY_CODE_LEN && code.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_normalization() {
        assert_eq!(normalize_document("123.456.789-09"), "12345678909");
        assert_eq!(normalize_document("12.345.678/0001-95"), "12345678000195");
        assert!(is_valid_document("123.456.789-09"));
        assert!(is_valid_document("12.345.678/0001-95"));
        assert!(!is_valid_document("1234"));
    }

    #[test]
    fn test_code_shape() {
        assert!(is_valid_code("042917"));
        assert!(!is_valid_code("42917"));
        assert!(!is_valid_code("abcdef"));
    }
}
