//! Runtime errors.
//!
//! Every error carries the position of the construct that failed. Native
//! failures from builtins, constructors and methods arrive as
//! [`NativeError`] and are wrapped here with the call's position.

use fig_diagnostic::{Diagnostic, ErrorCode};
use fig_ir::SourcePosition;
use fig_value::{NativeError, Value};
use std::fmt;

pub type EvalResult<T = Value> = Result<T, EvalError>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalErrorKind {
    NonExistingVariable {
        name: String,
    },
    /// A variable or assignment target was given `void`.
    InvalidVariableAssignment {
        name: String,
    },
    NonExistingAttribute {
        attribute: String,
        object: String,
    },
    NonExistingFunction {
        name: String,
    },
    NonExistingMethod {
        method: String,
        object: String,
    },
    InvalidNumberOfArguments {
        function: String,
        expected: usize,
        got: usize,
    },
    TypeCasting {
        target: &'static str,
        got: &'static str,
    },
    InvalidConstructorArguments {
        class: String,
    },
    InvalidFunCallArguments {
        function: String,
    },
    BreakOutsideLoop,
    ReturnOutsideFunction,
    IndexOutOfRange {
        list: String,
    },
    InvalidIndex {
        list: String,
        got: &'static str,
    },
    /// The `for` binding would shadow a visible variable.
    IterableName {
        name: String,
    },
    FunctionRedefinition {
        name: String,
    },
    VariableRedeclaration {
        name: String,
    },
    InvalidType {
        expected: &'static str,
        got: &'static str,
    },
    MismatchedTypes,
    RecursionLimit {
        function: String,
    },
    DivisionByZero,
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::NonExistingVariable { .. } => ErrorCode::E6001,
            EvalErrorKind::InvalidVariableAssignment { .. } => ErrorCode::E6002,
            EvalErrorKind::NonExistingAttribute { .. } => ErrorCode::E6003,
            EvalErrorKind::NonExistingFunction { .. } => ErrorCode::E6004,
            EvalErrorKind::NonExistingMethod { .. } => ErrorCode::E6005,
            EvalErrorKind::InvalidNumberOfArguments { .. } => ErrorCode::E6006,
            EvalErrorKind::TypeCasting { .. } => ErrorCode::E6007,
            EvalErrorKind::InvalidConstructorArguments { .. } => ErrorCode::E6008,
            EvalErrorKind::InvalidFunCallArguments { .. } => ErrorCode::E6009,
            EvalErrorKind::BreakOutsideLoop => ErrorCode::E6010,
            EvalErrorKind::ReturnOutsideFunction => ErrorCode::E6011,
            EvalErrorKind::IndexOutOfRange { .. } => ErrorCode::E6012,
            EvalErrorKind::InvalidIndex { .. } => ErrorCode::E6013,
            EvalErrorKind::IterableName { .. } => ErrorCode::E6014,
            EvalErrorKind::FunctionRedefinition { .. } => ErrorCode::E6015,
            EvalErrorKind::VariableRedeclaration { .. } => ErrorCode::E6016,
            EvalErrorKind::DivisionByZero => ErrorCode::E6017,
            EvalErrorKind::InvalidType { .. } => ErrorCode::E6018,
            EvalErrorKind::MismatchedTypes => ErrorCode::E6019,
            EvalErrorKind::RecursionLimit { .. } => ErrorCode::E6020,
        }
    }

    /// Attach a position.
    pub fn at(self, position: SourcePosition) -> EvalError {
        EvalError {
            kind: self,
            position,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::NonExistingVariable { name } => {
                write!(f, "Tried to access non-existing variable: {name}")
            }
            EvalErrorKind::InvalidVariableAssignment { name } => write!(
                f,
                "Invalid variable assignment for: {name}, variable cannot be assigned an empty value"
            ),
            EvalErrorKind::NonExistingAttribute { attribute, object } => write!(
                f,
                "Tried to access non-existing attribute: {attribute} for object: {object}"
            ),
            EvalErrorKind::NonExistingFunction { name } => {
                write!(f, "Tried to access a non-defined function: {name}")
            }
            EvalErrorKind::NonExistingMethod { method, object } => write!(
                f,
                "Tried to access non-existing method: {method} for object: {object}"
            ),
            EvalErrorKind::InvalidNumberOfArguments {
                function,
                expected,
                got,
            } => write!(
                f,
                "Invalid number of arguments for function {function} Expected {expected}, got {got}"
            ),
            EvalErrorKind::TypeCasting { target, got } => {
                write!(f, "Invalid type casting -- cannot cast {got} to {target}")
            }
            EvalErrorKind::InvalidConstructorArguments { class } => {
                write!(f, "Invalid constructor arguments for class {class}")
            }
            EvalErrorKind::InvalidFunCallArguments { function } => {
                write!(f, "Invalid arguments for function call {function}")
            }
            EvalErrorKind::BreakOutsideLoop => f.write_str("Break statement outside of loop"),
            EvalErrorKind::ReturnOutsideFunction => {
                f.write_str("Return statement outside of function")
            }
            EvalErrorKind::IndexOutOfRange { list } => {
                write!(f, "Index out of range for list: {list}")
            }
            EvalErrorKind::InvalidIndex { list, got } => write!(
                f,
                "Invalid index for list: {list} --expected type of index: int, got: {got}"
            ),
            EvalErrorKind::IterableName { name } => write!(
                f,
                "Variable with name: {name} already exists in this scope, name of item to iterate over must be unique"
            ),
            EvalErrorKind::FunctionRedefinition { name } => write!(
                f,
                "Function with name: {name} already exists, name of function must be unique"
            ),
            EvalErrorKind::VariableRedeclaration { name } => write!(
                f,
                "Variable with name: {name} already exists in this scope, name of variable must be unique"
            ),
            EvalErrorKind::InvalidType { expected, got } => {
                write!(f, "Invalid type, expected: {expected}, got: {got}")
            }
            EvalErrorKind::MismatchedTypes => {
                f.write_str("Mismatched types of operands in operation")
            }
            EvalErrorKind::RecursionLimit { function } => {
                write!(f, "Recursion limit exceeded for function: {function}")
            }
            EvalErrorKind::DivisionByZero => f.write_str("Division by zero"),
        }
    }
}

impl EvalError {
    #[cold]
    pub fn non_existing_variable(name: &str, position: SourcePosition) -> Self {
        EvalErrorKind::NonExistingVariable { name: name.into() }.at(position)
    }

    #[cold]
    pub fn invalid_variable_assignment(name: &str, position: SourcePosition) -> Self {
        EvalErrorKind::InvalidVariableAssignment { name: name.into() }.at(position)
    }

    #[cold]
    pub fn non_existing_attribute(attribute: &str, object: &str, position: SourcePosition) -> Self {
        EvalErrorKind::NonExistingAttribute {
            attribute: attribute.into(),
            object: object.into(),
        }
        .at(position)
    }

    #[cold]
    pub fn non_existing_function(name: &str, position: SourcePosition) -> Self {
        EvalErrorKind::NonExistingFunction { name: name.into() }.at(position)
    }

    #[cold]
    pub fn non_existing_method(method: &str, object: &str, position: SourcePosition) -> Self {
        EvalErrorKind::NonExistingMethod {
            method: method.into(),
            object: object.into(),
        }
        .at(position)
    }

    #[cold]
    pub fn invalid_number_of_arguments(
        function: &str,
        expected: usize,
        got: usize,
        position: SourcePosition,
    ) -> Self {
        EvalErrorKind::InvalidNumberOfArguments {
            function: function.into(),
            expected,
            got,
        }
        .at(position)
    }

    #[cold]
    pub fn break_outside_loop(position: SourcePosition) -> Self {
        EvalErrorKind::BreakOutsideLoop.at(position)
    }

    #[cold]
    pub fn return_outside_function(position: SourcePosition) -> Self {
        EvalErrorKind::ReturnOutsideFunction.at(position)
    }

    #[cold]
    pub fn index_out_of_range(list: &str, position: SourcePosition) -> Self {
        EvalErrorKind::IndexOutOfRange { list: list.into() }.at(position)
    }

    #[cold]
    pub fn invalid_index(list: &str, got: &'static str, position: SourcePosition) -> Self {
        EvalErrorKind::InvalidIndex {
            list: list.into(),
            got,
        }
        .at(position)
    }

    #[cold]
    pub fn iterable_name(name: &str, position: SourcePosition) -> Self {
        EvalErrorKind::IterableName { name: name.into() }.at(position)
    }

    #[cold]
    pub fn function_redefinition(name: &str, position: SourcePosition) -> Self {
        EvalErrorKind::FunctionRedefinition { name: name.into() }.at(position)
    }

    #[cold]
    pub fn variable_redeclaration(name: &str, position: SourcePosition) -> Self {
        EvalErrorKind::VariableRedeclaration { name: name.into() }.at(position)
    }

    #[cold]
    pub fn invalid_type(expected: &'static str, got: &'static str, position: SourcePosition) -> Self {
        EvalErrorKind::InvalidType { expected, got }.at(position)
    }

    #[cold]
    pub fn recursion_limit(function: &str, position: SourcePosition) -> Self {
        EvalErrorKind::RecursionLimit {
            function: function.into(),
        }
        .at(position)
    }

    /// Wrap a native failure raised by the call at `position`.
    #[cold]
    pub fn native(err: NativeError, position: SourcePosition) -> Self {
        let kind = match err {
            NativeError::InvalidConstructorArguments { class } => {
                EvalErrorKind::InvalidConstructorArguments {
                    class: class.into(),
                }
            }
            NativeError::InvalidCallArguments { function } => {
                EvalErrorKind::InvalidFunCallArguments {
                    function: function.into(),
                }
            }
            NativeError::InvalidArgumentCount {
                function,
                expected,
                got,
            } => EvalErrorKind::InvalidNumberOfArguments {
                function: function.into(),
                expected,
                got,
            },
            NativeError::TypeCasting { target, got } => EvalErrorKind::TypeCasting { target, got },
        };
        kind.at(position)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.position, "")
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

impl std::error::Error for EvalError {}
