//! Figura Eval - tree-walking interpreter for Figura programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - [`Environment`]: owned stack of call frames, each a stack of block scopes
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator semantics on values
//! - [`Interpreter`]: statement and expression dispatch over the closed AST
//!   enums, built through [`InterpreterBuilder`]
//! - builtins (`print`, `str`, `int`, `float`) and the `fig_shapes`
//!   constructors, registered as embedded functions
//!
//! Runtime failures are [`EvalError`]s carrying the position of the failing
//! construct.

mod builtins;
mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{ControlFlow, Function, Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::{evaluate_binary, evaluate_unary, require_bool};
pub use print_handler::{PrintHandler, SharedPrintHandler};
