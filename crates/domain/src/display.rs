//! Displayed form of a metric value.
//!
//! Metric values are opaque JSON; they are shown the way a browser renders a
//! value assigned to an element's `textContent`.

use serde_json::{Number, Value};

/// Coerce a JSON value into the text shown in a display element.
///
/// Strings are shown verbatim (no quotes), booleans in their JSON spelling,
/// numbers as a browser prints them (`100.0` shows as `100`), `null` as
/// `null`, arrays as their elements joined by `,` (with nested `null`
/// rendered empty), and objects as `[object Object]`.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => join_items(items),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Whole floats below `1e21` print without a fraction, like JS `Number#toString`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}

fn join_items(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            other => display_text(other),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_show_strings_without_quotes() {
        assert_eq!(display_text(&json!("28:cd:c1:0a:3b:7f")), "28:cd:c1:0a:3b:7f");
    }

    #[test]
    fn should_show_numbers_in_json_spelling() {
        assert_eq!(display_text(&json!(61.5)), "61.5");
        assert_eq!(display_text(&json!(42)), "42");
        assert_eq!(display_text(&json!(-3)), "-3");
    }

    #[test]
    fn should_show_integral_floats_like_js() {
        let hundred: Value = serde_json::from_str("100.0").unwrap();
        assert_eq!(display_text(&hundred), "100");
        let exponent: Value = serde_json::from_str("1e2").unwrap();
        assert_eq!(display_text(&exponent), "100");
        assert_eq!(display_text(&json!(-0.0)), "0");
        assert_eq!(display_text(&json!(-12.0)), "-12");
        assert_eq!(display_text(&json!(1e20)), "100000000000000000000");
    }

    #[test]
    fn should_keep_fractional_floats_unchanged() {
        assert_eq!(display_text(&json!(0.75)), "0.75");
        assert_eq!(display_text(&json!([1.0, 2.5])), "1,2.5");
    }

    #[test]
    fn should_show_booleans_and_null() {
        assert_eq!(display_text(&json!(true)), "true");
        assert_eq!(display_text(&json!(false)), "false");
        assert_eq!(display_text(&Value::Null), "null");
    }

    #[test]
    fn should_join_arrays_with_commas() {
        assert_eq!(display_text(&json!([1, "a", null, [2, 3]])), "1,a,,2,3");
        assert_eq!(display_text(&json!([])), "");
    }

    #[test]
    fn should_show_objects_as_opaque_placeholder() {
        assert_eq!(display_text(&json!({"state": "on"})), "[object Object]");
    }
}
