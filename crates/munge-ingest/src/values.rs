//! Rendering single cells as text.

use polars::prelude::AnyValue;

/// Text form of a cell, used for group keys and display.
///
/// Null renders as an empty string. Floats drop trailing zeros so an integral
/// age read as `40.0` keys and prints as `40`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Float32(v) => trim_float(f64::from(v)),
        AnyValue::Float64(v) => trim_float(v),
        other => other.str_value().into_owned(),
    }
}

fn trim_float(v: f64) -> String {
    let s = v.to_string();
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
