//! Binary and unary operator semantics.
//!
//! Each operator checks its operand types first:
//! - `or`, `and`, `!` take booleans
//! - arithmetic and ordering take numbers (`int` or `float`, never `bool`)
//! - `==` and `!=` take two operands of the same runtime type
//!
//! Integer arithmetic that overflows is redone in floating point.
//!
//! Errors come back as bare [`EvalErrorKind`]s; the interpreter attaches
//! the operator's position.

use crate::EvalErrorKind;
use fig_ir::{BinaryOp, UnaryOp};
use fig_value::{Number, Value};

/// Boolean operand, or `InvalidType(boolean)`.
pub fn require_bool(value: &Value) -> Result<bool, EvalErrorKind> {
    value.as_bool().ok_or(EvalErrorKind::InvalidType {
        expected: "boolean",
        got: value.type_name(),
    })
}

fn require_number(value: &Value) -> Result<Number, EvalErrorKind> {
    value.as_number().ok_or(EvalErrorKind::InvalidType {
        expected: "number",
        got: value.type_name(),
    })
}

/// Apply `op` to two evaluated operands. `or` and `and` are accepted here
/// too, but the interpreter short-circuits them before both sides exist.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Or => Ok(Value::Bool(require_bool(left)? || require_bool(right)?)),
        BinaryOp::And => Ok(Value::Bool(require_bool(left)? && require_bool(right)?)),
        BinaryOp::Eq | BinaryOp::NotEq => {
            if left.type_name() != right.type_name() {
                return Err(EvalErrorKind::MismatchedTypes);
            }
            let equal = left == right;
            Ok(Value::Bool(if op == BinaryOp::Eq { equal } else { !equal }))
        }
        BinaryOp::Div | BinaryOp::FloorDiv | BinaryOp::Mod
            if right.as_number().is_some_and(Number::is_zero) =>
        {
            Err(EvalErrorKind::DivisionByZero)
        }
        _ => {
            let (a, b) = (require_number(left)?, require_number(right)?);
            Ok(match op {
                BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => {
                    Value::Bool(compare(op, a, b))
                }
                _ => arithmetic(op, a, b),
            })
        }
    }
}

fn compare(op: BinaryOp, a: Number, b: Number) -> bool {
    let ordering = match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.partial_cmp(&y),
        _ => a.as_f64().partial_cmp(&b.as_f64()),
    };
    ordering.is_some_and(|ordering| match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::Gt => ordering.is_gt(),
        BinaryOp::LtEq => ordering.is_le(),
        _ => ordering.is_ge(),
    })
}

/// Arithmetic on two numbers whose divisor, if any, is non-zero.
fn arithmetic(op: BinaryOp, a: Number, b: Number) -> Value {
    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        let exact = match op {
            BinaryOp::Add => x.checked_add(y),
            BinaryOp::Sub => x.checked_sub(y),
            BinaryOp::Mul => x.checked_mul(y),
            BinaryOp::FloorDiv => floor_div(x, y),
            BinaryOp::Mod => floor_mod(x, y),
            BinaryOp::Pow => u32::try_from(y).ok().and_then(|exp| x.checked_pow(exp)),
            _ => None,
        };
        if let Some(result) = exact {
            return Value::Int(result);
        }
    }

    let (x, y) = (a.as_f64(), b.as_f64());
    Value::Float(match op {
        BinaryOp::Add => x + y,
        BinaryOp::Sub => x - y,
        BinaryOp::Mul => x * y,
        BinaryOp::Div => x / y,
        BinaryOp::FloorDiv => (x / y).floor(),
        BinaryOp::Mod => float_mod(x, y),
        _ => x.powf(y),
    })
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Remainder with the sign of the divisor.
fn floor_mod(a: i64, b: i64) -> Option<i64> {
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder.checked_add(b)
    } else {
        Some(remainder)
    }
}

#[allow(clippy::float_cmp, reason = "only an exact zero remainder keeps its sign")]
fn float_mod(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
        remainder + b
    } else {
        remainder
    }
}

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!require_bool(operand)?)),
        UnaryOp::Negate => Ok(match require_number(operand)? {
            Number::Int(n) => n
                .checked_neg()
                .map_or_else(|| Value::Float(-Number::Int(n).as_f64()), Value::Int),
            Number::Float(n) => Value::Float(-n),
        }),
    }
}

#[cfg(test)]
mod tests;
