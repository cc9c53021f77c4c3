//! Доступ к полям записи по ключу колонки
//!
//! Таблица не знает конкретных типов: она получает значение ячейки через
//! `TableRecord::value` и использует его и для отображения, и для поиска.

use std::fmt;

/// Raw value of a record field
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Falsy values (`null`, empty string, `0`, `false`) never match a search
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Int(n) => *n != 0,
            CellValue::Float(f) => *f != 0.0 && !f.is_nan(),
            CellValue::Bool(b) => *b,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Bool(true) => write!(f, "Sim"),
            CellValue::Bool(false) => write!(f, "Não"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

impl From<&Option<String>> for CellValue {
    fn from(value: &Option<String>) -> Self {
        value.as_deref().map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Запись, которую умеет показывать `DataTable`
pub trait TableRecord {
    /// Stable row key
    fn row_id(&self) -> i32;

    /// Value of the field behind a column key; unknown keys are `Empty`
    fn value(&self, key: &str) -> CellValue;
}

/// Case-insensitive substring match on the string form of `value`
pub fn matches_query(value: &CellValue, query_lower: &str) -> bool {
    value.is_truthy() && value.to_string().to_lowercase().contains(query_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        assert!(!CellValue::Empty.is_truthy());
        assert!(!CellValue::from("").is_truthy());
        assert!(!CellValue::from(0).is_truthy());
        assert!(!CellValue::from(false).is_truthy());
        assert!(!CellValue::from(None::<String>).is_truthy());
        assert!(CellValue::from("Lancha").is_truthy());
        assert!(CellValue::from(12).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::from(true).to_string(), "Sim");
        assert_eq!(CellValue::from(false).to_string(), "Não");
        assert_eq!(CellValue::from(Some(42)).to_string(), "42");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_matches_query_ignores_case() {
        let value = CellValue::from("Marina da Glória");
        assert!(matches_query(&value, "glória"));
        assert!(matches_query(&value, "marina"));
        assert!(!matches_query(&value, "búzios"));
        assert!(!matches_query(&CellValue::Int(0), "0"));
    }
}
