//! Scalar typing of value tokens.
//!
//! [`coerce`] is the only place a lexeme becomes a typed [`Value`]. The rules
//! are tried in order and the first match wins:
//!
//! | Lexeme                         | Result                         |
//! |--------------------------------|--------------------------------|
//! | `"..."`                        | `String`, quotes removed       |
//! | `true` / `false` (any case)    | `Boolean`                      |
//! | `null` (any case)              | `Null`                         |
//! | `@x` prefix                    | `String` with `0x` prefix      |
//! | `-?[0-9]+`                     | `Integer`                      |
//! | `-?[0-9]+.[0-9]+`              | `Float`                        |
//! | anything else                  | `String`, unchanged            |
//!
//! Integers outside the `i64` range and floats that overflow `f64` keep their
//! source text as a `String`.

use crate::Value;

/// Classifies one lexeme into a typed value. Never fails.
///
/// # Examples
///
/// ```rust
/// use lightconf::{coerce, Value};
///
/// assert_eq!(coerce("FALSE"), Value::Boolean(false));
/// assert_eq!(coerce("@xFF00"), Value::String("0xFF00".to_string()));
/// assert_eq!(coerce("-42"), Value::Integer(-42));
/// assert_eq!(coerce("3.14"), Value::Float(3.14));
/// assert_eq!(coerce("\"hi there\""), Value::String("hi there".to_string()));
/// ```
#[must_use]
pub fn coerce(lexeme: &str) -> Value {
    if lexeme.starts_with('"') && lexeme.ends_with('"') {
        return Value::String(lexeme.trim_matches('"').to_string());
    }

    if lexeme.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if lexeme.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }
    if lexeme.eq_ignore_ascii_case("null") {
        return Value::Null;
    }

    if let Some(hex) = lexeme.strip_prefix("@x") {
        return Value::String(format!("0x{}", hex));
    }

    if is_integer_literal(lexeme) {
        if let Ok(i) = lexeme.parse::<i64>() {
            return Value::Integer(i);
        }
    } else if is_float_literal(lexeme) {
        if let Ok(f) = lexeme.parse::<f64>() {
            if f.is_finite() {
                return Value::Float(f);
            }
        }
    }

    Value::String(lexeme.to_string())
}

fn unsigned(lexeme: &str) -> &str {
    lexeme.strip_prefix('-').unwrap_or(lexeme)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer_literal(lexeme: &str) -> bool {
    all_digits(unsigned(lexeme))
}

fn is_float_literal(lexeme: &str) -> bool {
    match unsigned(lexeme).split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_strings() {
        assert_eq!(coerce("\"hi there\""), Value::String("hi there".into()));
        assert_eq!(coerce("\"true\""), Value::String("true".into()));
        assert_eq!(coerce("\"42\""), Value::String("42".into()));
        assert_eq!(coerce("\"\""), Value::String(String::new()));
        // a lone quote both starts and ends with a quote
        assert_eq!(coerce("\""), Value::String(String::new()));
        // unterminated quote falls through to a plain string
        assert_eq!(coerce("\"open"), Value::String("\"open".into()));
    }

    #[test]
    fn test_keywords_any_case() {
        assert_eq!(coerce("true"), Value::Boolean(true));
        assert_eq!(coerce("True"), Value::Boolean(true));
        assert_eq!(coerce("FALSE"), Value::Boolean(false));
        assert_eq!(coerce("null"), Value::Null);
        assert_eq!(coerce("NuLL"), Value::Null);
        assert_eq!(coerce("nil"), Value::String("nil".into()));
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(coerce("@xFF00"), Value::String("0xFF00".into()));
        assert_eq!(coerce("@x"), Value::String("0x".into()));
        assert_eq!(coerce("@X12"), Value::String("@X12".into()));
        assert_eq!(coerce("@x12"), Value::String("0x12".into()));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(coerce("0"), Value::Integer(0));
        assert_eq!(coerce("-42"), Value::Integer(-42));
        assert_eq!(coerce("007"), Value::Integer(7));
        assert_eq!(coerce("3.14"), Value::Float(3.14));
        assert_eq!(coerce("-0.5"), Value::Float(-0.5));
    }

    #[test]
    fn test_number_lookalikes_stay_strings() {
        for lexeme in ["+5", "1.", ".5", "1.2.3", "1e5", "-", "--1", "12a", "0x10", "٣"] {
            assert_eq!(coerce(lexeme), Value::String(lexeme.into()), "{lexeme}");
        }
    }

    #[test]
    fn test_out_of_range_integer_keeps_text() {
        let big = "99999999999999999999";
        assert_eq!(coerce(big), Value::String(big.into()));
        assert_eq!(coerce("9223372036854775807"), Value::Integer(i64::MAX));
        assert_eq!(coerce("-9223372036854775808"), Value::Integer(i64::MIN));
    }
}
