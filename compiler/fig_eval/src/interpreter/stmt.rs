//! Statement execution.

use super::{ControlFlow, Function, Interpreter};
use crate::{require_bool, EvalError, EvalResult};
use fig_ir::{Block, Expr, FunctionDef, SourcePosition, Stmt, StmtKind};
use fig_stack::ensure_sufficient_stack;
use fig_value::{Symbol, Value};

impl<'a> Interpreter<'a> {
    pub(crate) fn exec_stmt(&mut self, stmt: &'a Stmt) -> EvalResult<ControlFlow> {
        let position = stmt.position;
        match &stmt.kind {
            StmtKind::FunctionDef(def) => {
                self.define_function(def, position)?;
                Ok(ControlFlow::Normal)
            }
            StmtKind::VarDecl { name, value } => {
                if self.env.is_declared_here(name) {
                    return Err(EvalError::variable_redeclaration(name, position));
                }
                let value = self.eval_expr(value)?;
                if value.is_void() {
                    return Err(EvalError::invalid_variable_assignment(name, position));
                }
                self.env.define(name, Symbol::new(value));
                Ok(ControlFlow::Normal)
            }
            StmtKind::Assign { target, value } => {
                let cell = self.eval_place(target)?;
                let value = self.eval_expr(value)?;
                if value.is_void() {
                    return Err(EvalError::invalid_variable_assignment(
                        target.head_name(),
                        position,
                    ));
                }
                cell.set(value);
                Ok(ControlFlow::Normal)
            }
            StmtKind::If {
                branches,
                else_block,
            } => {
                for branch in branches {
                    if self.condition(&branch.condition)? {
                        return self.exec_block(&branch.block);
                    }
                }
                match else_block {
                    Some(block) => self.exec_block(block),
                    None => Ok(ControlFlow::Normal),
                }
            }
            StmtKind::While { condition, body } => self.exec_while(condition, body),
            StmtKind::For {
                binding,
                iterable,
                body,
            } => self.exec_for(binding, iterable, body, position),
            StmtKind::Break => {
                if self.env.in_loop() {
                    Ok(ControlFlow::Break)
                } else {
                    Err(EvalError::break_outside_loop(position))
                }
            }
            StmtKind::Return(value) => {
                if !self.env.in_function() {
                    return Err(EvalError::return_outside_function(position));
                }
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Void,
                };
                Ok(ControlFlow::Return(value))
            }
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(ControlFlow::Normal)
            }
        }
    }

    /// Run `block` in its own scope, stopping at the first `break` or `return`.
    pub(crate) fn exec_block(&mut self, block: &'a Block) -> EvalResult<ControlFlow> {
        ensure_sufficient_stack(|| {
            let mut scoped = self.scoped();
            for statement in &block.statements {
                match scoped.exec_stmt(statement)? {
                    ControlFlow::Normal => {}
                    flow @ (ControlFlow::Break | ControlFlow::Return(_)) => return Ok(flow),
                }
            }
            Ok(ControlFlow::Normal)
        })
    }

    /// Function names are global and unique, builtins included.
    fn define_function(&mut self, def: &'a FunctionDef, position: SourcePosition) -> EvalResult<()> {
        if self.functions.contains_key(&def.name) {
            return Err(EvalError::function_redefinition(&def.name, position));
        }
        self.functions.insert(
            def.name.clone(),
            Function::User {
                params: &def.params,
                body: &def.body,
            },
        );
        tracing::debug!(name = %def.name, params = def.params.len(), "defined function");
        Ok(())
    }

    /// Evaluate an `if`/`elif`/`while` condition. Only booleans are accepted.
    fn condition(&mut self, condition: &'a Expr) -> EvalResult<bool> {
        let value = self.eval_expr(condition)?;
        require_bool(&value).map_err(|kind| kind.at(condition.position))
    }

    fn exec_while(&mut self, condition: &'a Expr, body: &'a Block) -> EvalResult<ControlFlow> {
        let mut looping = self.looping();
        while looping.condition(condition)? {
            match looping.exec_block(body)? {
                ControlFlow::Normal => {}
                ControlFlow::Break => break,
                flow @ ControlFlow::Return(_) => return Ok(flow),
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// Bind each element's own cell to `binding` in the current scope, one
    /// iteration at a time, over the cells the list held when the loop began.
    fn exec_for(
        &mut self,
        binding: &'a str,
        iterable: &'a Expr,
        body: &'a Block,
        position: SourcePosition,
    ) -> EvalResult<ControlFlow> {
        let value = self.eval_expr(iterable)?;
        let Some(list) = value.as_list().cloned() else {
            return Err(EvalError::invalid_type(
                "list",
                value.type_name(),
                iterable.position,
            ));
        };

        let mut looping = self.looping();
        for item in list.items() {
            if looping.env.lookup(binding).is_some() {
                return Err(EvalError::iterable_name(binding, position));
            }
            looping.env.define(binding, item);
            let flow = looping.exec_block(body);
            looping.env.remove(binding);
            match flow? {
                ControlFlow::Normal => {}
                ControlFlow::Break => break,
                flow @ ControlFlow::Return(_) => return Ok(flow),
            }
        }
        Ok(ControlFlow::Normal)
    }
}
