//! Parse error types.
//!
//! The parser stops at the first error. Because tokens are pulled lazily,
//! a [`ParseError`] may also carry the lexical error that was hit while
//! looking for the next token.

use fig_diagnostic::{Diagnostic, ErrorCode};
use fig_ir::{SourcePosition, TokenTag};
use fig_lexer::LexError;
use std::fmt;

/// Error produced while turning source text into a [`Program`](fig_ir::Program).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
}

/// A grammar violation at a position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub position: SourcePosition,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    /// A specific token was required here.
    UnexpectedToken { expected: TokenTag, found: TokenTag },
    /// A construct is incomplete and no single token would fix it.
    InvalidSyntax { message: &'static str },
}

impl ParseError {
    #[cold]
    pub fn unexpected_token(
        expected: TokenTag,
        found: TokenTag,
        position: SourcePosition,
    ) -> Self {
        ParseError::Syntax(SyntaxError {
            kind: SyntaxErrorKind::UnexpectedToken { expected, found },
            position,
        })
    }

    #[cold]
    pub fn invalid_syntax(message: &'static str, position: SourcePosition) -> Self {
        ParseError::Syntax(SyntaxError {
            kind: SyntaxErrorKind::InvalidSyntax { message },
            position,
        })
    }

    pub fn position(&self) -> SourcePosition {
        match self {
            ParseError::Lex(err) => err.position,
            ParseError::Syntax(err) => err.position,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::Syntax(err) => err.to_diagnostic(),
        }
    }
}

impl SyntaxError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.kind.error_code()).with_message(self.kind.to_string());
        match self.kind {
            SyntaxErrorKind::UnexpectedToken { expected, .. } => {
                diagnostic.with_label(self.position, format!("expected {expected}"))
            }
            SyntaxErrorKind::InvalidSyntax { .. } => diagnostic.with_label(self.position, ""),
        }
    }
}

impl SyntaxErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SyntaxErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            SyntaxErrorKind::InvalidSyntax { .. } => ErrorCode::E1002,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "Unexpected token -- expected: {expected}, found: {found}")
            }
            SyntaxErrorKind::InvalidSyntax { message } => write!(f, "Invalid syntax -- {message}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => err.fmt(f),
            ParseError::Syntax(err) => write!(f, "{} at {}", err.kind, err.position),
        }
    }
}

impl std::error::Error for ParseError {}
