#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalErrorKind> {
    evaluate_binary(op, &left, &right)
}

#[test]
fn int_arithmetic_stays_int() {
    assert_eq!(binary(BinaryOp::Add, Value::Int(2), Value::Int(3)), Ok(Value::Int(5)));
    assert_eq!(binary(BinaryOp::Sub, Value::Int(2), Value::Int(3)), Ok(Value::Int(-1)));
    assert_eq!(binary(BinaryOp::Mul, Value::Int(4), Value::Int(3)), Ok(Value::Int(12)));
    assert_eq!(binary(BinaryOp::Pow, Value::Int(2), Value::Int(10)), Ok(Value::Int(1024)));
}

#[test]
fn int_division_yields_float() {
    assert_eq!(binary(BinaryOp::Div, Value::Int(7), Value::Int(2)), Ok(Value::Float(3.5)));
    assert_eq!(binary(BinaryOp::Div, Value::Int(4), Value::Int(2)), Ok(Value::Float(2.0)));
}

#[test]
fn mixed_operands_promote_to_float() {
    assert_eq!(binary(BinaryOp::Add, Value::Int(1), Value::Float(0.5)), Ok(Value::Float(1.5)));
    assert_eq!(binary(BinaryOp::Pow, Value::Int(2), Value::Int(-1)), Ok(Value::Float(0.5)));
    assert_eq!(binary(BinaryOp::Pow, Value::Float(4.0), Value::Float(0.5)), Ok(Value::Float(2.0)));
}

#[test]
fn overflow_promotes_to_float() {
    let result = binary(BinaryOp::Add, Value::Int(i64::MAX), Value::Int(1)).unwrap();
    assert!(matches!(result, Value::Float(_)));
    let result = binary(BinaryOp::Pow, Value::Int(10), Value::Int(40)).unwrap();
    assert!(matches!(result, Value::Float(_)));
    let result = evaluate_unary(UnaryOp::Negate, &Value::Int(i64::MIN)).unwrap();
    assert!(matches!(result, Value::Float(_)));
}

#[test]
fn floor_division_and_modulo_follow_the_divisor_sign() {
    assert_eq!(binary(BinaryOp::FloorDiv, Value::Int(7), Value::Int(2)), Ok(Value::Int(3)));
    assert_eq!(binary(BinaryOp::FloorDiv, Value::Int(-7), Value::Int(2)), Ok(Value::Int(-4)));
    assert_eq!(binary(BinaryOp::Mod, Value::Int(-7), Value::Int(2)), Ok(Value::Int(1)));
    assert_eq!(binary(BinaryOp::Mod, Value::Int(7), Value::Int(-2)), Ok(Value::Int(-1)));
    assert_eq!(
        binary(BinaryOp::FloorDiv, Value::Float(-7.0), Value::Int(2)),
        Ok(Value::Float(-4.0))
    );
    assert_eq!(
        binary(BinaryOp::Mod, Value::Float(-7.5), Value::Int(2)),
        Ok(Value::Float(0.5))
    );
}

#[test]
fn division_by_zero_is_checked_first() {
    for op in [BinaryOp::Div, BinaryOp::FloorDiv, BinaryOp::Mod] {
        assert_eq!(
            binary(op, Value::Int(1), Value::Int(0)),
            Err(EvalErrorKind::DivisionByZero)
        );
        assert_eq!(
            binary(op, Value::Int(1), Value::Float(0.0)),
            Err(EvalErrorKind::DivisionByZero)
        );
        assert_eq!(
            binary(op, Value::string("s"), Value::Int(0)),
            Err(EvalErrorKind::DivisionByZero)
        );
    }
}

#[test]
fn arithmetic_requires_numbers() {
    assert_eq!(
        binary(BinaryOp::Add, Value::Int(1), Value::string("s")),
        Err(EvalErrorKind::InvalidType {
            expected: "number",
            got: "str",
        })
    );
    assert_eq!(
        binary(BinaryOp::Lt, Value::Bool(true), Value::Int(1)),
        Err(EvalErrorKind::InvalidType {
            expected: "number",
            got: "bool",
        })
    );
}

#[test]
fn comparisons() {
    assert_eq!(binary(BinaryOp::Lt, Value::Int(1), Value::Int(2)), Ok(Value::Bool(true)));
    assert_eq!(binary(BinaryOp::GtEq, Value::Int(2), Value::Float(2.0)), Ok(Value::Bool(true)));
    assert_eq!(binary(BinaryOp::Gt, Value::Float(1.5), Value::Int(2)), Ok(Value::Bool(false)));
    assert_eq!(binary(BinaryOp::LtEq, Value::Int(3), Value::Int(2)), Ok(Value::Bool(false)));
}

#[test]
fn equality_requires_identical_types() {
    assert_eq!(
        binary(BinaryOp::Eq, Value::Int(1), Value::string("1")),
        Err(EvalErrorKind::MismatchedTypes)
    );
    assert_eq!(
        binary(BinaryOp::Eq, Value::Int(1), Value::Float(1.0)),
        Err(EvalErrorKind::MismatchedTypes)
    );
    assert_eq!(
        binary(BinaryOp::Eq, Value::string("a"), Value::string("a")),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        binary(BinaryOp::NotEq, Value::Int(1), Value::Int(2)),
        Ok(Value::Bool(true))
    );
}

#[test]
fn lists_compare_element_wise() {
    let a = Value::list([Value::Int(1), Value::string("x")]);
    let b = Value::list([Value::Int(1), Value::string("x")]);
    let c = Value::list([Value::Int(2)]);
    assert_eq!(binary(BinaryOp::Eq, a.clone(), b), Ok(Value::Bool(true)));
    assert_eq!(binary(BinaryOp::Eq, a, c), Ok(Value::Bool(false)));
}

#[test]
fn logical_operators_require_booleans() {
    assert_eq!(
        binary(BinaryOp::And, Value::Bool(true), Value::Bool(false)),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        binary(BinaryOp::Or, Value::Bool(false), Value::Bool(true)),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        binary(BinaryOp::Or, Value::Int(1), Value::Bool(true)),
        Err(EvalErrorKind::InvalidType {
            expected: "boolean",
            got: "int",
        })
    );
}

#[test]
fn unary_operators() {
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::Bool(true)), Ok(Value::Bool(false)));
    assert_eq!(evaluate_unary(UnaryOp::Negate, &Value::Int(3)), Ok(Value::Int(-3)));
    assert_eq!(evaluate_unary(UnaryOp::Negate, &Value::Float(1.5)), Ok(Value::Float(-1.5)));
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &Value::Int(0)),
        Err(EvalErrorKind::InvalidType {
            expected: "boolean",
            got: "int",
        })
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Negate, &Value::string("s")),
        Err(EvalErrorKind::InvalidType {
            expected: "number",
            got: "str",
        })
    );
}
