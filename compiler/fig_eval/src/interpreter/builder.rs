//! `InterpreterBuilder` for creating Interpreter instances.

use super::{Function, Interpreter};
use crate::print_handler::{PrintHandler, SharedPrintHandler};
use crate::{builtins, Environment};
use fig_shapes::{Canvas, SharedCanvas, CONSTRUCTORS};
use fig_value::Value;
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Builder for [`Interpreter`].
///
/// Output goes to stdout and rendering to the logging canvas unless the
/// builder is given other handlers.
pub struct InterpreterBuilder {
    max_recursion_depth: usize,
    print_handler: Option<SharedPrintHandler>,
    canvas: Option<SharedCanvas>,
}

impl InterpreterBuilder {
    /// `max_recursion_depth` bounds consecutive calls of the same function.
    pub fn new(max_recursion_depth: usize) -> Self {
        InterpreterBuilder {
            max_recursion_depth,
            print_handler: None,
            canvas: None,
        }
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the canvas every constructed figure renders to.
    #[must_use]
    pub fn canvas(mut self, canvas: SharedCanvas) -> Self {
        self.canvas = Some(canvas);
        self
    }

    /// Build the interpreter with builtins and constructors registered.
    pub fn build<'a>(self) -> Interpreter<'a> {
        let print_handler = self.print_handler.unwrap_or_else(PrintHandler::stdout);
        let canvas = self.canvas.unwrap_or_else(Canvas::log);

        let mut functions = FxHashMap::default();
        builtins::register(&mut functions, &print_handler);
        for constructor in CONSTRUCTORS {
            let canvas = Rc::clone(&canvas);
            functions.insert(
                constructor.name.to_owned(),
                Function::Embedded {
                    arity: Some(constructor.arity),
                    body: Rc::new(move |args: &[Value]| constructor.construct(args, &canvas)),
                },
            );
        }
        tracing::trace!(functions = functions.len(), "registered natives");

        Interpreter {
            env: Environment::new(),
            functions,
            call_stack: Vec::new(),
            max_recursion_depth: self.max_recursion_depth,
            print_handler,
            canvas,
        }
    }
}
