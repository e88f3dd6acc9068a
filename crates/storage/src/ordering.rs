//! Value ordering shared by the in-process stores.
//!
//! Mirrors `SQLite`'s ordering of `json_extract` results: NULL first, then
//! numbers (booleans as 0/1), then text compared bytewise. Arrays and
//! objects come back from `json_extract` as JSON text and sort with strings.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde_json::Value;

fn rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_) | Value::Number(_)) => 1,
        Some(Value::String(_) | Value::Array(_) | Value::Object(_)) => 2,
    }
}

fn as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Total order over optional JSON scalars.
pub(crate) fn compare_json(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let by_rank = rank(a).cmp(&rank(b));
    if by_rank != Ordering::Equal {
        return by_rank;
    }
    match (a, b) {
        (Some(x), Some(y)) if rank(a) == 2 => as_text(x).as_bytes().cmp(as_text(y).as_bytes()),
        (Some(x), Some(y)) if rank(a) == 1 => {
            if let (Some(i), Some(j)) = (x.as_i64(), y.as_i64()) {
                return i.cmp(&j);
            }
            let (x, y) = (as_number(x).unwrap_or(0.0), as_number(y).unwrap_or(0.0));
            x.total_cmp(&y)
        },
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_sorts_first() {
        assert_eq!(compare_json(None, Some(&json!(0))), Ordering::Less);
        assert_eq!(compare_json(Some(&Value::Null), None), Ordering::Equal);
    }

    #[test]
    fn test_numbers_before_text() {
        assert_eq!(compare_json(Some(&json!(999)), Some(&json!("1"))), Ordering::Less);
    }

    #[test]
    fn test_integers_compare_numerically() {
        assert_eq!(compare_json(Some(&json!(9)), Some(&json!(10))), Ordering::Less);
    }

    #[test]
    fn test_text_compares_bytewise() {
        assert_eq!(compare_json(Some(&json!("Zed")), Some(&json!("alpha"))), Ordering::Less);
    }

    #[test]
    fn test_arrays_sort_as_json_text() {
        let arr = json!(["a"]);
        assert_eq!(compare_json(Some(&arr), Some(&json!("b"))), Ordering::Less);
        assert_eq!(compare_json(Some(&json!(5)), Some(&arr)), Ordering::Less);
        assert_eq!(compare_json(Some(&json!("[\"a\"]")), Some(&arr)), Ordering::Equal);
    }

    #[test]
    fn test_bool_as_number() {
        assert_eq!(compare_json(Some(&json!(false)), Some(&json!(true))), Ordering::Less);
        assert_eq!(compare_json(Some(&json!(true)), Some(&json!(1))), Ordering::Equal);
    }
}
