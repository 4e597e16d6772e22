//! Errors raised by native code: builtins, constructors and methods.
//!
//! Native code does not know where in the source it was called from; the
//! interpreter attaches the call position when it converts these.

use crate::Value;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NativeError {
    /// A constructor got arguments of the wrong type.
    InvalidConstructorArguments { class: &'static str },
    /// A function or method got arguments of the wrong type or value.
    InvalidCallArguments { function: &'static str },
    /// A function or method got the wrong number of arguments.
    InvalidArgumentCount {
        function: &'static str,
        expected: usize,
        got: usize,
    },
    /// A cast builtin could not convert its argument.
    TypeCasting {
        target: &'static str,
        got: &'static str,
    },
}

pub type NativeResult<T> = Result<T, NativeError>;

impl NativeError {
    #[cold]
    pub fn invalid_constructor_arguments(class: &'static str) -> Self {
        NativeError::InvalidConstructorArguments { class }
    }

    #[cold]
    pub fn invalid_call_arguments(function: &'static str) -> Self {
        NativeError::InvalidCallArguments { function }
    }

    #[cold]
    pub fn type_casting(target: &'static str, got: &'static str) -> Self {
        NativeError::TypeCasting { target, got }
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeError::InvalidConstructorArguments { class } => {
                write!(f, "Invalid constructor arguments for class {class}")
            }
            NativeError::InvalidCallArguments { function } => {
                write!(f, "Invalid arguments for function call {function}")
            }
            NativeError::InvalidArgumentCount {
                function,
                expected,
                got,
            } => write!(
                f,
                "Invalid number of arguments for function {function} Expected {expected}, got {got}"
            ),
            NativeError::TypeCasting { target, got } => {
                write!(f, "Invalid type casting -- cannot cast {got} to {target}")
            }
        }
    }
}

impl std::error::Error for NativeError {}

/// Fail with `InvalidArgumentCount` unless exactly `expected` arguments were given.
pub fn check_arity(function: &'static str, args: &[Value], expected: usize) -> NativeResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(NativeError::InvalidArgumentCount {
            function,
            expected,
            got: args.len(),
        })
    }
}
