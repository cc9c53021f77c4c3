//! Conversions between text inputs and DTO values

/// Blank input becomes `None`
pub fn opt_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Unparsable input becomes `None`; the DTO rules decide whether that is an error
pub fn opt_int(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Required integer; garbage maps to 0 so the range rule reports it
pub fn int_or_zero(value: &str) -> i32 {
    opt_int(value).unwrap_or(0)
}

/// Accepts both `-22.9` and `-22,9`
pub fn opt_float(value: &str) -> Option<f64> {
    value.trim().replace(',', ".").parse().ok()
}

pub fn show_opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Select value for an optional id ("" when unset)
pub fn id_value(id: Option<i32>) -> String {
    show_opt(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_numbers() {
        assert_eq!(opt_text("  "), None);
        assert_eq!(opt_text(" Búzios "), Some("Búzios".to_string()));
        assert_eq!(opt_int("12"), Some(12));
        assert_eq!(opt_int("doze"), None);
        assert_eq!(int_or_zero(""), 0);
        assert_eq!(opt_float("-22,95"), Some(-22.95));
        assert_eq!(opt_float(""), None);
    }

    #[test]
    fn test_show_opt() {
        assert_eq!(show_opt(&Some(3)), "3");
        assert_eq!(show_opt::<i32>(&None), "");
        assert_eq!(id_value(Some(7)), "7");
    }
}
