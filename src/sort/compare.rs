//! Total ordering over JSON values

use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Compare two JSON values.
///
/// Values of the same type compare naturally: numbers numerically, strings by
/// code point, `false < true`. Arrays and objects fall back to their compact
/// JSON text. Values of different types are ordered by type rank
/// (null < bool < number < string < array < object).
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            a.to_string().cmp(&b.to_string())
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Compare two optional field values; absent fields sort last.
pub fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => compare_values(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    match (exact(x), exact(y)) {
        (Exact::Int(a), Exact::Int(b)) => a.cmp(&b),
        (Exact::Int(a), Exact::Float(b)) => int_vs_float(a, b),
        (Exact::Float(a), Exact::Int(b)) => int_vs_float(b, a).reverse(),
        // JSON numbers are finite, so partial_cmp never returns None.
        (Exact::Float(a), Exact::Float(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

enum Exact {
    Int(i128),
    Float(f64),
}

fn exact(number: &Number) -> Exact {
    if let Some(i) = number.as_i64() {
        Exact::Int(i128::from(i))
    } else if let Some(u) = number.as_u64() {
        Exact::Int(i128::from(u))
    } else {
        Exact::Float(number.as_f64().unwrap_or(0.0))
    }
}

/// Exact comparison of an integer against a finite float, without rounding
/// the integer through `f64`.
fn int_vs_float(int: i128, float: f64) -> Ordering {
    // 2^64: every JSON integer lies strictly inside (-2^64, 2^64).
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;
    if float >= LIMIT {
        return Ordering::Less;
    }
    if float <= -LIMIT {
        return Ordering::Greater;
    }
    let floor = float.floor();
    // `floor` is integral and within range, so the cast is exact.
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Ordering::Less,
        other => other,
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(compare_values(&json!(2), &json!(10)), Ordering::Less);
        assert_eq!(compare_values(&json!(-1), &json!(0.5)), Ordering::Less);
        assert_eq!(compare_values(&json!(3.0), &json!(3)), Ordering::Equal);
        assert_eq!(compare_values(&json!(u64::MAX), &json!(1)), Ordering::Greater);
    }

    #[test]
    fn test_large_integers_against_floats_are_exact() {
        let above = json!(9_007_199_254_740_993_u64);
        let float = json!(9_007_199_254_740_992.0);
        let below = json!(9_007_199_254_740_992_u64);

        assert_eq!(compare_values(&above, &float), Ordering::Greater);
        assert_eq!(compare_values(&float, &above), Ordering::Less);
        assert_eq!(compare_values(&float, &below), Ordering::Equal);
        assert_eq!(compare_values(&above, &below), Ordering::Greater);
        assert_eq!(compare_values(&json!(u64::MAX), &json!(1.0e30)), Ordering::Less);
        assert_eq!(compare_values(&json!(i64::MIN), &json!(-1.0e30)), Ordering::Greater);
        assert_eq!(compare_values(&json!(-3), &json!(-2.5)), Ordering::Less);
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(compare_values(&json!(-0.0), &json!(0.0)), Ordering::Equal);
        assert_eq!(compare_values(&json!(-0.0), &json!(0)), Ordering::Equal);
    }

    #[test]
    fn test_strings_compare_by_code_point() {
        assert_eq!(compare_values(&json!("Zebra"), &json!("apple")), Ordering::Less);
        assert_eq!(compare_values(&json!("abc"), &json!("abd")), Ordering::Less);
    }

    #[test]
    fn test_mixed_types_use_type_rank() {
        assert_eq!(compare_values(&json!(null), &json!(false)), Ordering::Less);
        assert_eq!(compare_values(&json!(true), &json!(0)), Ordering::Less);
        assert_eq!(compare_values(&json!(100), &json!("1")), Ordering::Less);
        assert_eq!(compare_values(&json!({}), &json!([])), Ordering::Greater);
    }

    #[test]
    fn test_absent_fields_sort_last() {
        let present = json!(0);
        assert_eq!(compare_fields(Some(&present), None), Ordering::Less);
        assert_eq!(compare_fields(None, Some(&present)), Ordering::Greater);
        assert_eq!(compare_fields(None, None), Ordering::Equal);
    }
}
