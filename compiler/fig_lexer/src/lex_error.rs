//! Lexer error types.
//!
//! Every error carries the position it refers to. For literals that is the
//! start of the literal, except for a bad escape, which points at the escaped
//! character.

use fig_diagnostic::{Diagnostic, ErrorCode};
use fig_ir::SourcePosition;
use std::fmt;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: SourcePosition,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// No token starts with this character (or `&`/`|` was not doubled).
    InvalidCharacter,
    /// Identifier exceeded the configured length.
    IdentifierTooLong { max: usize },
    /// String literal exceeded the configured length.
    StringTooLong { max: usize },
    /// Escape of a character with no escape meaning, e.g. `\q`.
    InvalidEscapeSequence { escape_char: char },
    /// Newline or end of input before the closing quote.
    UnclosedString,
    /// Integer literal with too many digits, or not representable as `i64`.
    IntegerTooLong { max: usize },
    /// Float literal with too many digits after the decimal point.
    TooManyFloatDecimals { max: usize },
}

impl LexErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            LexErrorKind::InvalidCharacter => ErrorCode::E0001,
            LexErrorKind::IdentifierTooLong { .. } => ErrorCode::E0002,
            LexErrorKind::StringTooLong { .. } => ErrorCode::E0003,
            LexErrorKind::UnclosedString => ErrorCode::E0004,
            LexErrorKind::InvalidEscapeSequence { .. } => ErrorCode::E0005,
            LexErrorKind::IntegerTooLong { .. } => ErrorCode::E0006,
            LexErrorKind::TooManyFloatDecimals { .. } => ErrorCode::E0007,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::InvalidCharacter => f.write_str("Invalid syntax -- forbidden character"),
            LexErrorKind::IdentifierTooLong { max } => {
                write!(f, "ID longer than maximum ({max} characters)")
            }
            LexErrorKind::StringTooLong { max } => {
                write!(f, "String longer than maximum ({max} characters)")
            }
            LexErrorKind::InvalidEscapeSequence { escape_char } => {
                write!(f, "Attempt to escape an unfitting character: \\{escape_char}")
            }
            LexErrorKind::UnclosedString => f.write_str("Unclosed string"),
            LexErrorKind::IntegerTooLong { max } => {
                write!(f, "Integer bigger than maximum ({max})")
            }
            LexErrorKind::TooManyFloatDecimals { max } => write!(
                f,
                "Too many digits after a decimal in float (maximum {max} digits)"
            ),
        }
    }
}

impl LexError {
    #[cold]
    pub fn invalid_character(position: SourcePosition) -> Self {
        Self::new(LexErrorKind::InvalidCharacter, position)
    }

    #[cold]
    pub fn identifier_too_long(position: SourcePosition, max: usize) -> Self {
        Self::new(LexErrorKind::IdentifierTooLong { max }, position)
    }

    #[cold]
    pub fn string_too_long(position: SourcePosition, max: usize) -> Self {
        Self::new(LexErrorKind::StringTooLong { max }, position)
    }

    #[cold]
    pub fn invalid_escape(position: SourcePosition, escape_char: char) -> Self {
        Self::new(LexErrorKind::InvalidEscapeSequence { escape_char }, position)
    }

    #[cold]
    pub fn unclosed_string(position: SourcePosition) -> Self {
        Self::new(LexErrorKind::UnclosedString, position)
    }

    #[cold]
    pub fn integer_too_long(position: SourcePosition, max: usize) -> Self {
        Self::new(LexErrorKind::IntegerTooLong { max }, position)
    }

    #[cold]
    pub fn too_many_decimals(position: SourcePosition, max: usize) -> Self {
        Self::new(LexErrorKind::TooManyFloatDecimals { max }, position)
    }

    fn new(kind: LexErrorKind, position: SourcePosition) -> Self {
        LexError { kind, position }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.position, "")
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

impl std::error::Error for LexError {}
