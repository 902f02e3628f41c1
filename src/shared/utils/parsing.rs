use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D").expect("valid non-digit regex"));
static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading int regex"));

/// Lenient coercions for loosely-typed store fields and URL parameters
pub struct FieldParser;

impl FieldParser {
    /// Integer prefix of a string: `"2018abc"` → 2018, `"abc"` → None
    pub fn leading_int(value: &str) -> Option<i64> {
        LEADING_INT
            .captures(value)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<i64>().ok())
    }

    /// The digits of a string, in order; None when there are none
    pub fn digits_only(value: &str) -> Option<String> {
        let digits = NON_DIGITS.replace_all(value, "");
        (!digits.is_empty()).then(|| digits.into_owned())
    }

    /// Strip every non-digit then parse: `"50,000 km"` → 50000
    pub fn sanitized_digits(value: &str) -> Option<u64> {
        Self::digits_only(value).and_then(|digits| digits.parse::<u64>().ok())
    }

    /// Numbers as is; strings only when the whole trimmed text is numeric
    pub fn plain_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Integer from a number or a string's leading integer
    pub fn integer(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Value::String(s) => Self::leading_int(s),
            _ => None,
        }
    }

    /// Comma-delimited string or array of strings → trimmed non-empty items
    pub fn string_list(value: &Value) -> Vec<String> {
        match value {
            Value::String(s) => s
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Display text of a scalar field; empty strings count as absent
    pub fn text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// `true` or `"true"` (any case)
    pub fn flag(value: &Value) -> bool {
        match value {
            Value::Bool(b) => *b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}
