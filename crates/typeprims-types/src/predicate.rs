//! Primitive type predicates.
//!
//! Each function classifies one JSON value against one schema primitive
//! type. Predicates never fail: a value that does not fit is simply `false`.
//! Booleans and numbers are disjoint here even where a host representation
//! would treat a boolean as `0`/`1`.

use serde_json::Value;

pub fn is_null(instance: &Value) -> bool {
    instance.is_null()
}

pub fn is_bool(instance: &Value) -> bool {
    instance.is_boolean()
}

pub fn is_array(instance: &Value) -> bool {
    instance.is_array()
}

pub fn is_object(instance: &Value) -> bool {
    instance.is_object()
}

pub fn is_string(instance: &Value) -> bool {
    instance.is_string()
}

/// True for numbers stored without a fractional part.
///
/// `4` qualifies; `4.0` does not, since it was written (and is stored) as a
/// float. Use [`is_integer_draft6`] for the relaxed rule.
pub fn is_integer(instance: &Value) -> bool {
    match instance {
        Value::Bool(_) => false,
        Value::Number(n) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}

pub fn is_number(instance: &Value) -> bool {
    match instance {
        Value::Bool(_) => false,
        Value::Number(_) => true,
        _ => false,
    }
}

/// Draft-3 catch-all type.
pub fn is_any(_instance: &Value) -> bool {
    true
}

/// Integer check from draft 6 onwards: floats with a zero fractional part
/// count as integers (`4.0` yes, `4.5` no).
pub fn is_integer_draft6(instance: &Value) -> bool {
    if let Value::Number(n) = instance {
        if n.is_f64() {
            return n.as_f64().is_some_and(|f| f.fract() == 0.0);
        }
    }
    is_integer(instance)
}
