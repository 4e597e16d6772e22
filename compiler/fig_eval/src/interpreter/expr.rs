//! Expression evaluation.
//!
//! Expressions that name storage (identifiers, indexing, dot chains) can be
//! evaluated as a *place*: the [`Symbol`] itself rather than a copy of its
//! value. Assignment writes through places, and `for` binds them.

use super::Interpreter;
use crate::{evaluate_binary, evaluate_unary, require_bool, EvalError, EvalResult};
use fig_ir::{Access, AccessKind, BinaryOp, Expr, ExprKind, Literal, SourcePosition};
use fig_stack::ensure_sufficient_stack;
use fig_value::{Symbol, Value};
use smallvec::SmallVec;

/// Evaluated call arguments.
pub(crate) type Args = SmallVec<[Value; 4]>;

impl<'a> Interpreter<'a> {
    pub(crate) fn eval_expr(&mut self, expr: &'a Expr) -> EvalResult {
        ensure_sufficient_stack(|| match &expr.kind {
            ExprKind::Literal(literal) => Ok(literal_value(literal)),
            ExprKind::Identifier(name) => self
                .env
                .lookup(name)
                .map(|symbol| symbol.get())
                .ok_or_else(|| EvalError::non_existing_variable(name, expr.position)),
            ExprKind::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval_expr(item))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::list(values))
            }
            ExprKind::Index { .. } | ExprKind::DotAccess { .. } => {
                Ok(self.eval_place(expr)?.get())
            }
            ExprKind::Call { name, args } => self.call(name, args, expr.position),
            ExprKind::Binary { op, left, right } if op.is_logical() => {
                self.eval_logical(*op, left, right, expr.position)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, &left, &right).map_err(|kind| kind.at(expr.position))
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(*op, &operand).map_err(|kind| kind.at(expr.position))
            }
        })
    }

    /// `or` and `and`: the right side only runs when it decides the result.
    fn eval_logical(
        &mut self,
        op: BinaryOp,
        left: &'a Expr,
        right: &'a Expr,
        position: SourcePosition,
    ) -> EvalResult {
        let left = self.eval_expr(left)?;
        let left = require_bool(&left).map_err(|kind| kind.at(position))?;
        if (op == BinaryOp::Or) == left {
            return Ok(Value::Bool(left));
        }
        let right = self.eval_expr(right)?;
        require_bool(&right)
            .map(Value::Bool)
            .map_err(|kind| kind.at(position))
    }

    /// The cell `expr` refers to. Expressions that do not name storage
    /// evaluate into a fresh cell.
    pub(crate) fn eval_place(&mut self, expr: &'a Expr) -> EvalResult<Symbol> {
        match &expr.kind {
            ExprKind::Identifier(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| EvalError::non_existing_variable(name, expr.position)),
            ExprKind::Index { name, indexes } => {
                let list = self
                    .env
                    .lookup(name)
                    .ok_or_else(|| EvalError::non_existing_variable(name, expr.position))?;
                self.index_into(list, indexes, name, expr.position)
            }
            ExprKind::DotAccess { base, steps } => self.eval_dot_access(base, steps),
            _ => Ok(Symbol::new(self.eval_expr(expr)?)),
        }
    }

    /// Follow one `[index]` per expression in `indexes`, starting at `cell`.
    /// Errors name `list_name`.
    fn index_into(
        &mut self,
        mut cell: Symbol,
        indexes: &'a [Expr],
        list_name: &str,
        position: SourcePosition,
    ) -> EvalResult<Symbol> {
        for index in indexes {
            let index_value = self.eval_expr(index)?;
            let container = cell.get();
            let Some(list) = container.as_list() else {
                return Err(EvalError::invalid_type(
                    "list",
                    container.type_name(),
                    position,
                ));
            };
            let Value::Int(index) = index_value else {
                return Err(EvalError::invalid_index(
                    list_name,
                    index_value.type_name(),
                    position,
                ));
            };
            cell = list
                .resolve_index(index)
                .and_then(|slot| list.get(slot))
                .ok_or_else(|| EvalError::index_out_of_range(list_name, position))?;
        }
        Ok(cell)
    }

    /// Fold the steps of `base.a.b()[0]` left to right. Every error names
    /// the object at the head of the chain.
    fn eval_dot_access(&mut self, base: &'a Expr, steps: &'a [Access]) -> EvalResult<Symbol> {
        let object_name = base.head_name();
        let mut current = self.eval_place(base)?;
        for step in steps {
            current = match &step.kind {
                AccessKind::Attribute(name) => {
                    attribute(&current, name, object_name, step.position)?
                }
                AccessKind::Index { name, indexes } => {
                    let list = attribute(&current, name, object_name, step.position)?;
                    self.index_into(list, indexes, object_name, step.position)?
                }
                AccessKind::Method { name, args } => {
                    self.call_method(&current, name, args, object_name, step.position)?
                }
            };
        }
        Ok(current)
    }

    /// Look the method up, then evaluate arguments and call it. A method
    /// that returns nothing yields `void`.
    fn call_method(
        &mut self,
        receiver: &Symbol,
        method: &str,
        args: &'a [Expr],
        object_name: &str,
        position: SourcePosition,
    ) -> EvalResult<Symbol> {
        let object = receiver
            .with(|value| value.as_object().filter(|o| o.has_method(method)).cloned())
            .ok_or_else(|| EvalError::non_existing_method(method, object_name, position))?;
        let args = self.eval_args(args)?;
        let result = object
            .call_method(method, &args)
            .map_err(|err| EvalError::native(err, position))?;
        Ok(result.unwrap_or_else(|| Symbol::new(Value::Void)))
    }

    pub(crate) fn eval_args(&mut self, args: &'a [Expr]) -> EvalResult<Args> {
        args.iter().map(|arg| self.eval_expr(arg)).collect()
    }
}

fn attribute(
    receiver: &Symbol,
    name: &str,
    object_name: &str,
    position: SourcePosition,
) -> EvalResult<Symbol> {
    receiver
        .with(|value| value.as_object().and_then(|object| object.attribute(name)))
        .ok_or_else(|| EvalError::non_existing_attribute(name, object_name, position))
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Int(n) => Value::Int(*n),
        Literal::Float(n) => Value::Float(*n),
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Str(s) => Value::string(s.as_str()),
    }
}
