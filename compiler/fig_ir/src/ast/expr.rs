//! Expression nodes.

use super::{BinaryOp, UnaryOp};
use crate::SourcePosition;

/// An expression with the position it starts at.
///
/// Binary nodes use the position of their operator token.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub position: SourcePosition,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, position: SourcePosition) -> Self {
        Expr { kind, position }
    }

    /// Name used when a runtime error refers to this expression as an
    /// object: the identifier, list or function at its head.
    pub fn head_name(&self) -> &str {
        match &self.kind {
            ExprKind::Identifier(name)
            | ExprKind::Index { name, .. }
            | ExprKind::Call { name, .. } => name,
            ExprKind::DotAccess { base, .. } => base.head_name(),
            ExprKind::Binary { .. }
            | ExprKind::Unary { .. }
            | ExprKind::Literal(_)
            | ExprKind::List(_) => "<expression>",
        }
    }
}

/// Expression variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Literal(Literal),
    /// Variable reference: `a`
    Identifier(String),
    /// List literal: `[1, 2, 3]` (possibly empty)
    List(Vec<Expr>),
    /// Indexing a named list, one entry per bracket: `a[0][1]`
    Index { name: String, indexes: Vec<Expr> },
    /// Call of a function or constructor: `foo(1, 2)`
    Call { name: String, args: Vec<Expr> },
    /// Dot chain: `base.step.step()`; `steps` is never empty.
    DotAccess { base: Box<Expr>, steps: Vec<Access> },
}

/// Literal terms.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// One step after a `.` in a dot chain.
#[derive(Clone, PartialEq, Debug)]
pub struct Access {
    pub kind: AccessKind,
    pub position: SourcePosition,
}

#[derive(Clone, PartialEq, Debug)]
pub enum AccessKind {
    /// `.side`
    Attribute(String),
    /// `.figures[0]`
    Index { name: String, indexes: Vec<Expr> },
    /// `.area()`
    Method { name: String, args: Vec<Expr> },
}
