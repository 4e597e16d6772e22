//! Integer-preserving arithmetic for figure properties.
//!
//! Two ints stay an int unless the result overflows, in which case the
//! result is computed in floating point instead.

use fig_value::Number;

pub(crate) fn add(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map_or_else(|| Number::Float(a.as_f64() + b.as_f64()), Number::Int),
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

pub(crate) fn sub(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_sub(y)
            .map_or_else(|| Number::Float(a.as_f64() - b.as_f64()), Number::Int),
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

pub(crate) fn mul(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_mul(y)
            .map_or_else(|| Number::Float(a.as_f64() * b.as_f64()), Number::Int),
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}
