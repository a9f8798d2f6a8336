use std::fmt;

use serde::Serialize;

/// A loosely typed option value, as written in a decorator or frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Coerces a raw token: `true`/`false` (any case), all-digit integers,
    /// digits with a single `.` as floats, anything else verbatim.
    pub fn coerce(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        if is_digits(raw) {
            if let Ok(i) = raw.parse() {
                return Value::Int(i);
            }
        } else if let Some((whole, frac)) = raw.split_once('.')
            && is_digits(&format!("{whole}{frac}"))
            && let Ok(f) = raw.parse()
        {
            return Value::Float(f);
        }
        Value::Str(raw.to_string())
    }

    /// Coerces text (such as a quoted YAML scalar); other values pass through.
    pub fn coerced(self) -> Self {
        match self {
            Value::Str(s) => Value::coerce(&s),
            other => other,
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", Value::Bool(true))]
    #[case("FALSE", Value::Bool(false))]
    #[case("42", Value::Int(42))]
    #[case("2.75", Value::Float(2.75))]
    #[case(".5", Value::Float(0.5))]
    #[case("1.2.3", Value::Str("1.2.3".into()))]
    #[case("-5", Value::Str("-5".into()))]
    #[case("34px", Value::Str("34px".into()))]
    #[case("", Value::Str(String::new()))]
    fn coerce(#[case] raw: &str, #[case] expected: Value) {
        assert_eq!(Value::coerce(raw), expected);
    }

    #[test]
    fn oversized_integer_stays_text() {
        let raw = "99999999999999999999999";
        assert_eq!(Value::coerce(raw), Value::Str(raw.to_string()));
    }

    #[test]
    fn coerced_only_reinterprets_text() {
        assert_eq!(Value::from("true").coerced(), Value::Bool(true));
        assert_eq!(Value::from("1024").coerced(), Value::Int(1024));
        assert_eq!(Value::Float(1.5).coerced(), Value::Float(1.5));
    }

    #[test]
    fn display_round_trips_scalars() {
        assert_eq!(Value::Int(7).to_string(), "7");
        assert_eq!(Value::from("blue").to_string(), "blue");
    }
}
