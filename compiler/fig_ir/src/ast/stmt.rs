//! Statement nodes.

use super::Expr;
use crate::SourcePosition;

/// A whole program: top-level statements in source order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A braced block. Evaluating it opens a scope.
#[derive(Clone, PartialEq, Debug)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub position: SourcePosition,
}

/// A statement with the position of its first token.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub position: SourcePosition,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, position: SourcePosition) -> Self {
        Stmt { kind, position }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    FunctionDef(FunctionDef),
    /// `var name = value;`
    VarDecl { name: String, value: Expr },
    /// `target = value;` where `target` is an identifier, index or dot chain
    Assign { target: Expr, value: Expr },
    /// `if (c) {..} elif (c) {..} else {..}`; `branches` holds the `if` and
    /// every `elif` in order.
    If {
        branches: Vec<IfBranch>,
        else_block: Option<Block>,
    },
    While { condition: Expr, body: Block },
    /// `for (binding in iterable) {..}`
    For {
        binding: String,
        iterable: Expr,
        body: Block,
    },
    Break,
    Return(Option<Expr>),
    /// Expression evaluated for its effect: `foo();`
    Expr(Expr),
}

#[derive(Clone, PartialEq, Debug)]
pub struct IfBranch {
    pub condition: Expr,
    pub block: Block,
}

/// `def name(params) { body }`
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
}
