//! Figura IR - positions, tokens and the syntax tree.
//!
//! This crate holds data only. The lexer produces [`Token`]s, the parser
//! produces a [`Program`], and the evaluator walks it. Nothing here knows how
//! to run a program.
//!
//! - [`SourcePosition`]: 1-based line, column of a token or node
//! - [`TokenKind`] / [`TokenTag`]: token payloads and their fieldless tags
//! - [`ast`]: closed statement and expression enums

pub mod ast;
mod position;
mod token;

pub use ast::{
    Access, AccessKind, BinaryOp, Block, Expr, ExprKind, FunctionDef, IfBranch, Literal, Program,
    Stmt, StmtKind, UnaryOp,
};
pub use position::SourcePosition;
pub use token::{Token, TokenKind, TokenTag};
