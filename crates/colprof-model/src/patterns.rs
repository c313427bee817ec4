//! Validation patterns for numeric column types.

use std::sync::LazyLock;

use regex::Regex;

/// Optional integer part, a decimal point and at least one fractional digit.
static FLOAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.\d+$").expect("Invalid float regex"));

/// Unsigned digits without a leading zero, except `0` itself.
static INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9]\d*)$").expect("Invalid integer regex"));

/// Returns true if the value is a float literal with a fractional part.
///
/// Bare integers such as `42` do not match.
pub fn is_float_literal(value: &str) -> bool {
    FLOAT_REGEX.is_match(value)
}

/// Returns true if the value is an unsigned integer literal.
pub fn is_integer_literal(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_literal() {
        assert!(is_float_literal("3.5"));
        assert!(is_float_literal(".5"));
        assert!(is_float_literal("0.25"));
        assert!(!is_float_literal("4"));
        assert!(!is_float_literal("4."));
        assert!(!is_float_literal("-1.5"));
        assert!(!is_float_literal("1e5"));
        assert!(!is_float_literal(""));
        assert!(!is_float_literal(" 1.5"));
    }

    #[test]
    fn test_integer_literal() {
        assert!(is_integer_literal("0"));
        assert!(is_integer_literal("7"));
        assert!(is_integer_literal("10"));
        assert!(!is_integer_literal("007"));
        assert!(!is_integer_literal("-3"));
        assert!(!is_integer_literal("+3"));
        assert!(!is_integer_literal("1.0"));
        assert!(!is_integer_literal(""));
    }

    #[test]
    fn patterns_are_disjoint() {
        for value in ["0", "1", "12", "0.1", ".9", "1.25"] {
            assert!(!(is_float_literal(value) && is_integer_literal(value)));
        }
    }
}
