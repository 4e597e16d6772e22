//! Syntax tree for Figura programs.
//!
//! The tree is owned and immutable once built: every node owns its children
//! and carries the [`SourcePosition`](crate::SourcePosition) it came from.
//! Consumers dispatch with an exhaustive `match` over [`StmtKind`] and
//! [`ExprKind`].
//!
//! - `expr`: expressions and dot-access steps
//! - `operators`: binary and unary operators
//! - `stmt`: statements, blocks and function definitions

mod expr;
mod operators;
mod stmt;

pub use expr::{Access, AccessKind, Expr, ExprKind, Literal};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Block, FunctionDef, IfBranch, Program, Stmt, StmtKind};
