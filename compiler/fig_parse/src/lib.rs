//! Recursive descent parser for Figura.
//!
//! One token of lookahead, pulled lazily from the lexer. The first error
//! aborts the parse; there is no recovery.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, SyntaxError, SyntaxErrorKind};

use fig_ir::{Program, TokenTag};
use fig_lexer::{Lexer, LexerLimits};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source`. Fails if the very first token does not lex.
    pub fn new(source: &'a str, limits: LexerLimits) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(Lexer::new(source, limits))?,
        })
    }

    /// Parse a whole program: statements until end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while let Some(statement) = self.parse_statement()? {
            statements.push(statement);
        }
        self.cursor.expect(TokenTag::Eof)?;
        tracing::debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }
}

/// Parse `source` into a [`Program`].
pub fn parse(source: &str, limits: LexerLimits) -> Result<Program, ParseError> {
    Parser::new(source, limits)?.parse_program()
}
