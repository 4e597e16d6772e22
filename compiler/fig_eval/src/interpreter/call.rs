//! Function calls.

use super::{ControlFlow, Function, Interpreter};
use crate::{EvalError, EvalResult};
use fig_ir::{Expr, SourcePosition};
use fig_value::{Symbol, Value};

impl<'a> Interpreter<'a> {
    /// Call `name` with `args` evaluated in the caller's environment.
    #[tracing::instrument(level = "debug", skip_all, fields(function = name))]
    pub(crate) fn call(
        &mut self,
        name: &'a str,
        args: &'a [Expr],
        position: SourcePosition,
    ) -> EvalResult {
        let Some(function) = self.functions.get(name).cloned() else {
            return Err(EvalError::non_existing_function(name, position));
        };
        self.check_recursion(name, position)?;

        match function {
            Function::User { params, body } => {
                if params.len() != args.len() {
                    return Err(EvalError::invalid_number_of_arguments(
                        name,
                        params.len(),
                        args.len(),
                        position,
                    ));
                }
                let values = self.eval_args(args)?;

                let mut call = self.call_frame(name);
                for (param, value) in params.iter().zip(values) {
                    call.env.define(param, Symbol::new(value));
                }
                match call.exec_block(body)? {
                    ControlFlow::Return(value) => Ok(value),
                    ControlFlow::Normal | ControlFlow::Break => Ok(Value::Void),
                }
            }
            Function::Embedded { arity, body } => {
                let values = self.eval_args(args)?;
                if let Some(expected) = arity {
                    if values.len() != expected {
                        return Err(EvalError::invalid_number_of_arguments(
                            name,
                            expected,
                            values.len(),
                            position,
                        ));
                    }
                }
                body(values.as_slice()).map_err(|err| EvalError::native(err, position))
            }
        }
    }

    /// Fail once more than `max_recursion_depth` calls of `name` are
    /// already running back to back at the top of the call stack.
    fn check_recursion(&self, name: &str, position: SourcePosition) -> EvalResult<()> {
        let depth = self
            .call_stack
            .iter()
            .rev()
            .take_while(|&&active| active == name)
            .count();
        if depth > self.max_recursion_depth {
            tracing::debug!(function = name, depth, "recursion limit");
            return Err(EvalError::recursion_limit(name, position));
        }
        Ok(())
    }
}
