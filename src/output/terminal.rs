//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Format a `label, value` pair as one comma-separated line.
pub fn format_row<T: ToString>(label: &str, value: T) -> String {
    format!("{},{}", format_field(label, 15), format_field(value, 20))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_missing_value() {
        assert_eq!(
            format_row("first usable", "none"),
            r#" "first usable",              "none""#
        );
    }

    #[test]
    fn test_format_row_bool() {
        assert_eq!(
            format_row("private", true),
            r#"      "private",              "true""#
        );
    }

    #[test]
    fn test_format_row_address() {
        let mask = crate::models::Ipv4Address::from(u32::MAX);
        assert_eq!(
            format_row("mask", mask),
            r#"         "mask",   "255.255.255.255""#
        );
    }

    #[test]
    fn test_format_row_overflowing_fields() {
        assert_eq!(
            format_row("a label that is long", "a value that is too long"),
            r#""a label that is long","a value that is too long""#
        );
    }

    #[test]
    fn test_format_row() {
        assert_eq!(
            format_row("network", "10.0.0.0"),
            r#"      "network",          "10.0.0.0""#
        );
    }
}
