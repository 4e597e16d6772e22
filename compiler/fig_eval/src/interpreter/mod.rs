//! Tree-walking interpreter for Figura.
//!
//! The interpreter borrows the [`Program`] it runs: user functions keep
//! references to their parameter lists and bodies, so a program can be
//! interpreted any number of times by fresh interpreters without being
//! cloned or mutated.
//!
//! - `stmt`: statements, blocks and control flow
//! - `expr`: expressions, dot chains and list indexing
//! - `call`: function calls and the recursion limit
//! - `scope_guard`: RAII guards for scopes, call frames and loops
//!
//! Statements produce a [`ControlFlow`]; expressions produce a [`Value`].
//! Any error aborts the whole run.

mod builder;
mod call;
mod expr;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalResult};
use fig_ir::{Block, Program};
use fig_shapes::SharedCanvas;
use fig_value::{NativeResult, Value};
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Native function body: takes evaluated arguments, may fail with a
/// [`fig_value::NativeError`].
pub type NativeFn = Rc<dyn Fn(&[Value]) -> NativeResult<Value>>;

/// Entry in the global function table.
#[derive(Clone)]
pub enum Function<'a> {
    /// Defined with `def` in the program being run.
    User {
        params: &'a [String],
        body: &'a Block,
    },
    /// Builtin or constructor. `arity` is `None` for variadic functions.
    Embedded { arity: Option<usize>, body: NativeFn },
}

impl Function<'_> {
    pub(crate) fn embedded(arity: usize, body: fn(&[Value]) -> NativeResult<Value>) -> Self {
        Function::Embedded {
            arity: Some(arity),
            body: Rc::new(body),
        }
    }
}

/// How a statement finished.
#[derive(Debug)]
pub enum ControlFlow {
    Normal,
    Break,
    Return(Value),
}

pub struct Interpreter<'a> {
    pub(crate) env: Environment,
    pub(crate) functions: FxHashMap<String, Function<'a>>,
    /// Names of the user functions being executed, innermost last.
    pub(crate) call_stack: Vec<&'a str>,
    pub(crate) max_recursion_depth: usize,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) canvas: SharedCanvas,
}

impl<'a> Interpreter<'a> {
    /// Run every top-level statement in order.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn interpret(&mut self, program: &'a Program) -> EvalResult<()> {
        for statement in &program.statements {
            match self.exec_stmt(statement)? {
                ControlFlow::Normal => {}
                ControlFlow::Break | ControlFlow::Return(_) => break,
            }
        }
        tracing::debug!(functions = self.functions.len(), "program finished");
        Ok(())
    }

    /// Current value of global variable `name`.
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.env.lookup_global(name).map(|symbol| symbol.get())
    }

    /// Whether `name` is a builtin, constructor or defined function.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Everything `print` wrote, if the print handler buffers.
    pub fn print_output(&self) -> String {
        self.print_handler.output()
    }

    pub fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }
}
