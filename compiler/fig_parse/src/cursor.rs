//! One-token lookahead over the lexer.

use crate::ParseError;
use fig_ir::{SourcePosition, Token, TokenKind, TokenTag};
use fig_lexer::Lexer;

/// Holds the current token and pulls the next one from the lexer on demand.
pub struct Cursor<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Cursor<'a> {
    /// Prime the cursor with the first token.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Cursor { lexer, current })
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_tag(&self) -> TokenTag {
        self.current.tag()
    }

    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.current.position
    }

    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        self.current_tag() == tag
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenTag::Eof)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it has tag `tag`.
    pub fn eat(&mut self, tag: TokenTag) -> Result<bool, ParseError> {
        if self.check(tag) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a token of tag `tag` or fail with an unexpected-token error.
    pub fn expect(&mut self, tag: TokenTag) -> Result<Token, ParseError> {
        if self.check(tag) {
            self.advance()
        } else {
            Err(ParseError::unexpected_token(
                tag,
                self.current_tag(),
                self.position(),
            ))
        }
    }

    /// Consume an identifier and return its name and position.
    pub fn expect_ident(&mut self) -> Result<(String, SourcePosition), ParseError> {
        let token = self.expect(TokenTag::Ident)?;
        match token.kind {
            TokenKind::Ident(name) => Ok((name, token.position)),
            other => Err(ParseError::unexpected_token(
                TokenTag::Ident,
                other.tag(),
                token.position,
            )),
        }
    }
}
