//! Failures of a whole run, one variant per stage.
//!
//! A [`Problem`] describes what went wrong; [`Problem::to_diagnostic`] turns
//! it into the text shown to a user.

use fig_diagnostic::Diagnostic;
use fig_eval::{EvalError, EvalErrorKind};
use fig_ir::SourcePosition;
use fig_lexer::LexError;
use fig_parse::{ParseError, SyntaxError};
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Problem {
    Lex(LexError),
    Parse(SyntaxError),
    Eval(EvalError),
}

impl Problem {
    pub fn position(&self) -> SourcePosition {
        match self {
            Problem::Lex(err) => err.position,
            Problem::Parse(err) => err.position,
            Problem::Eval(err) => err.position,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Problem::Lex(err) => err.to_diagnostic(),
            Problem::Parse(err) => err.to_diagnostic(),
            Problem::Eval(err) => {
                let diagnostic = err.to_diagnostic();
                match &err.kind {
                    EvalErrorKind::RecursionLimit { .. } => diagnostic
                        .with_note("a function may only call itself a limited number of times in a row"),
                    EvalErrorKind::MismatchedTypes => {
                        diagnostic.with_note("`==` and `!=` never convert between types")
                    }
                    _ => diagnostic,
                }
            }
        }
    }
}

impl From<ParseError> for Problem {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(err) => Problem::Lex(err),
            ParseError::Syntax(err) => Problem::Parse(err),
        }
    }
}

impl From<LexError> for Problem {
    fn from(err: LexError) -> Self {
        Problem::Lex(err)
    }
}

impl From<EvalError> for Problem {
    fn from(err: EvalError) -> Self {
        Problem::Eval(err)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Lex(err) => write!(f, "{} at {}", err.kind, err.position),
            Problem::Parse(err) => write!(f, "{} at {}", err.kind, err.position),
            Problem::Eval(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Problem {}
