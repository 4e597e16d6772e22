//! Builtin functions: `print` and the `str`/`int`/`float` casts.
//!
//! Builtins are registered as embedded functions next to the object
//! constructors; user functions may not reuse their names.

use crate::interpreter::Function;
use crate::print_handler::SharedPrintHandler;
use fig_value::{NativeError, NativeResult, Value};
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Add every builtin to `functions`.
pub(crate) fn register(functions: &mut FxHashMap<String, Function<'_>>, handler: &SharedPrintHandler) {
    let handler = Rc::clone(handler);
    functions.insert(
        "print".to_owned(),
        Function::Embedded {
            arity: None,
            body: Rc::new(move |args: &[Value]| print(&handler, args)),
        },
    );
    functions.insert("str".to_owned(), Function::embedded(1, to_str));
    functions.insert("int".to_owned(), Function::embedded(1, to_int));
    functions.insert("float".to_owned(), Function::embedded(1, to_float));
}

/// Print the concatenation of string arguments, followed by a newline.
pub(crate) fn print(handler: &SharedPrintHandler, args: &[Value]) -> NativeResult<Value> {
    let mut line = String::new();
    for arg in args {
        let text = arg
            .as_str()
            .ok_or_else(|| NativeError::invalid_call_arguments("print"))?;
        line.push_str(text);
    }
    handler.println(&line);
    Ok(Value::Void)
}

fn single<'v>(function: &'static str, args: &'v [Value]) -> NativeResult<&'v Value> {
    match args {
        [value] => Ok(value),
        _ => Err(NativeError::InvalidArgumentCount {
            function,
            expected: 1,
            got: args.len(),
        }),
    }
}

pub(crate) fn to_str(args: &[Value]) -> NativeResult<Value> {
    Ok(Value::string(single("str", args)?.to_string()))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "floats are truncated toward zero after the range check"
)]
pub(crate) fn to_int(args: &[Value]) -> NativeResult<Value> {
    let value = single("int", args)?;
    let cast = match value {
        Value::Int(n) => Some(*n),
        Value::Float(n) => {
            let truncated = n.trunc();
            (truncated.is_finite()
                && truncated >= i64::MIN as f64
                && truncated < i64::MAX as f64)
                .then_some(truncated as i64)
        }
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Str(text) => text.trim().parse::<i64>().ok(),
        Value::Void | Value::List(_) | Value::Object(_) => None,
    };
    cast.map(Value::Int)
        .ok_or_else(|| NativeError::type_casting("int", value.type_name()))
}

#[allow(clippy::cast_precision_loss, reason = "int to float follows native semantics")]
pub(crate) fn to_float(args: &[Value]) -> NativeResult<Value> {
    let value = single("float", args)?;
    let cast = match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(n) => Some(*n),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::Str(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite()),
        Value::Void | Value::List(_) | Value::Object(_) => None,
    };
    cast.map(Value::Float)
        .ok_or_else(|| NativeError::type_casting("float", value.type_name()))
}
