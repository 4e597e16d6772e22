//! The runtime value enum.

use crate::{List, ObjectRef};
use fig_stack::ensure_sufficient_stack;
use std::fmt;
use std::rc::Rc;

/// Runtime value in the Figura interpreter.
#[derive(Clone)]
pub enum Value {
    /// Result of a call that returns nothing. Cannot be stored in a variable.
    Void,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(List),
    Object(ObjectRef),
}

impl Value {
    #[inline]
    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    #[inline]
    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        Value::List(List::from_values(values))
    }

    /// Runtime type name as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Object(object) => object.class_name(),
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Numeric view. Booleans are not numbers.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Downcast an object value to a concrete native type.
    pub fn downcast_object<T: 'static>(&self) -> Option<&T> {
        self.as_object()?.as_any().downcast_ref::<T>()
    }

    /// Representation used inside lists: strings are quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>, open: &mut Vec<List>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "'{s}'"),
            other => other.fmt_text(f, open),
        }
    }

    /// `open` holds the lists being printed around this value, outermost
    /// first.
    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, open: &mut Vec<List>) -> fmt::Result {
        match self {
            Value::Void => f.write_str("void"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => fmt_float(*n, f),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Str(s) => f.write_str(s),
            Value::List(list) => fmt_list(list, f, open),
            Value::Object(object) => write!(f, "<{} object>", object.class_name()),
        }
    }
}

/// A list already open further out prints as `[...]`.
pub(crate) fn fmt_list(
    list: &List,
    f: &mut fmt::Formatter<'_>,
    open: &mut Vec<List>,
) -> fmt::Result {
    if open.iter().any(|outer| outer.ptr_eq(list)) {
        return f.write_str("[...]");
    }
    open.push(list.clone());
    let result = ensure_sufficient_stack(|| {
        f.write_str("[")?;
        for (i, item) in list.values().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_nested(f, open)?;
        }
        f.write_str("]")
    });
    open.pop();
    result
}

/// Shortest text that reads back as `n`: a fractional part or an exponent
/// is always present (`1.0`, `1e+20`, `1.5e-07`), and non-finite values are
/// `nan`, `inf` and `-inf`.
fn fmt_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("nan");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "inf" } else { "-inf" });
    }
    let text = format!("{n:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&text),
    }
}

/// Text used by `str()` and `print`: strings unquoted, floats always with a
/// fractional part or exponent, booleans as `True`/`False`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_text(f, &mut Vec::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(_) => write!(f, "List({self})"),
            other => write!(f, "{}({other})", other.type_name()),
        }
    }
}

/// Scalars and lists compare by value, objects by identity. Values of
/// different types are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_equal(self, other, &mut Vec::new())
    }
}

#[allow(clippy::float_cmp, reason = "language equality is exact")]
fn values_equal(a: &Value, b: &Value, open: &mut Vec<(List, List)>) -> bool {
    match (a, b) {
        (Value::Void, Value::Void) => true,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::List(a), Value::List(b)) => lists_equal(a, b, open),
        (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// Element-wise comparison. A pair of lists already being compared further
/// out counts as equal, so self-containing lists compare in finite time.
fn lists_equal(a: &List, b: &List, open: &mut Vec<(List, List)>) -> bool {
    if a.ptr_eq(b) || open.iter().any(|(x, y)| x.ptr_eq(a) && y.ptr_eq(b)) {
        return true;
    }
    let (left, right) = (a.values(), b.values());
    if left.len() != right.len() {
        return false;
    }
    open.push((a.clone(), b.clone()));
    let equal =
        ensure_sufficient_stack(|| left.iter().zip(&right).all(|(x, y)| values_equal(x, y, open)));
    open.pop();
    equal
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(n) => Value::Int(n),
            Number::Float(n) => Value::Float(n),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// An `int` or `float` operand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(
        clippy::cast_precision_loss,
        reason = "int to float promotion is the language's numeric rule"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    #[allow(clippy::float_cmp, reason = "only exact zero divides badly")]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(n) => n == 0.0,
        }
    }
}

#[cfg(test)]
mod tests;
