//! String lists kept in a TEXT column as a JSON array.

pub fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Corrupt or legacy values degrade to an empty list
pub fn decode_list(raw: &str) -> Vec<String> {
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Invalid JSON list column ({}): {}", e, raw);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_column() {
        let items = vec!["mar".to_string(), "sol".to_string()];
        assert_eq!(encode_list(&items), r#"["mar","sol"]"#);
        assert_eq!(decode_list(r#"["mar","sol"]"#), items);
        assert!(decode_list("not json").is_empty());
    }
}
