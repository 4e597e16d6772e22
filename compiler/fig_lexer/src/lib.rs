//! Lexer for Figura.
//!
//! [`Lexer::next_token`] produces one token per call and is pulled lazily by
//! the parser, so a lexical error surfaces only once parsing reaches it.
//! [`lex`] collects a whole token vector, ending with `Eof`.
//!
//! Recognizers run in a fixed order after whitespace and `#` comments are
//! skipped: end of input, identifier/keyword, string, number, single-character
//! token, doubled operator (`&&`, `||`), then one-or-two character operators.

mod keywords;
mod lex_error;
mod limits;

pub use lex_error::{LexError, LexErrorKind};
pub use limits::LexerLimits;

use fig_ir::{SourcePosition, Token, TokenKind};
use fig_lexer_core::Stream;

/// Hand-written scanner over a [`Stream`].
pub struct Lexer<'a> {
    stream: Stream<'a>,
    limits: LexerLimits,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, limits: LexerLimits) -> Self {
        Lexer {
            stream: Stream::new(source),
            limits,
        }
    }

    /// Scan the next token. After `Eof` every further call returns `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();
        let start = self.stream.position();
        let kind = match self.stream.current() {
            None => TokenKind::Eof,
            Some(c) if c.is_alphabetic() => self.identifier_or_keyword(start)?,
            Some(quote @ ('"' | '\'')) => self.string(quote, start)?,
            Some(c) if c.is_ascii_digit() => self.number(start)?,
            Some(c) => self.operator(c, start)?,
        };
        tracing::trace!(kind = ?kind, position = %start, "token");
        Ok(Token::new(kind, start))
    }

    /// Whitespace and `#` comments, in any interleaving.
    fn skip_trivia(&mut self) {
        loop {
            while self.stream.current().is_some_and(char::is_whitespace) {
                self.stream.advance();
            }
            if self.stream.current() != Some('#') {
                return;
            }
            while self.stream.current().is_some_and(|c| c != '\n') {
                self.stream.advance();
            }
        }
    }

    fn identifier_or_keyword(&mut self, start: SourcePosition) -> Result<TokenKind, LexError> {
        let mut word = String::new();
        let mut length = 0;
        while let Some(c) = self
            .stream
            .current()
            .filter(|c| c.is_alphanumeric() || *c == '_')
        {
            length += 1;
            if length > self.limits.max_identifier_length {
                return Err(LexError::identifier_too_long(
                    start,
                    self.limits.max_identifier_length,
                ));
            }
            word.push(c);
            self.stream.advance();
        }
        Ok(keywords::lookup(&word).unwrap_or(TokenKind::Ident(word)))
    }

    fn string(&mut self, quote: char, start: SourcePosition) -> Result<TokenKind, LexError> {
        self.stream.advance();
        let mut text = String::new();
        let mut length = 0;
        loop {
            let c = match self.stream.current() {
                None | Some('\n') => return Err(LexError::unclosed_string(start)),
                Some(c) if c == quote => {
                    self.stream.advance();
                    return Ok(TokenKind::Str(text));
                }
                Some('\\') => {
                    self.stream.advance();
                    let escape_at = self.stream.position();
                    let Some(escaped) = self.stream.current() else {
                        return Err(LexError::unclosed_string(start));
                    };
                    cook_escape(escaped)
                        .ok_or_else(|| LexError::invalid_escape(escape_at, escaped))?
                }
                Some(c) => c,
            };
            length += 1;
            if length > self.limits.max_string_length {
                return Err(LexError::string_too_long(
                    start,
                    self.limits.max_string_length,
                ));
            }
            text.push(c);
            self.stream.advance();
        }
    }

    /// Integer or float. The digit text is collected and converted once, so
    /// floats get correctly rounded values (`999.` is exactly `999.0`).
    fn number(&mut self, start: SourcePosition) -> Result<TokenKind, LexError> {
        let max_digits = self.limits.max_int_digits;
        let mut text = String::new();
        while let Some(c) = self.stream.current().filter(char::is_ascii_digit) {
            text.push(c);
            if text.len() > max_digits {
                return Err(LexError::integer_too_long(start, max_digits));
            }
            self.stream.advance();
        }

        if !self.stream.eat('.') {
            return text
                .parse::<i64>()
                .map(TokenKind::Int)
                .map_err(|_| LexError::integer_too_long(start, max_digits));
        }

        let max_decimals = self.limits.max_float_decimals;
        let mut decimals = 0;
        text.push('.');
        while let Some(c) = self.stream.current().filter(char::is_ascii_digit) {
            decimals += 1;
            if decimals > max_decimals {
                return Err(LexError::too_many_decimals(start, max_decimals));
            }
            text.push(c);
            self.stream.advance();
        }
        if decimals == 0 {
            text.push('0');
        }
        text.parse::<f64>()
            .map(TokenKind::float)
            .map_err(|_| LexError::invalid_character(start))
    }

    fn operator(&mut self, c: char, start: SourcePosition) -> Result<TokenKind, LexError> {
        if let Some(kind) = single_char_token(c) {
            self.stream.advance();
            return Ok(kind);
        }

        // `&&` and `||` have no single-character form.
        if let Some(kind) = doubled_token(c) {
            self.stream.advance();
            return if self.stream.eat(c) {
                Ok(kind)
            } else {
                Err(LexError::invalid_character(start))
            };
        }

        let (single, second, double) = match c {
            '/' => (TokenKind::Slash, '/', TokenKind::SlashSlash),
            '*' => (TokenKind::Star, '*', TokenKind::StarStar),
            '=' => (TokenKind::Assign, '=', TokenKind::EqEq),
            '!' => (TokenKind::Not, '=', TokenKind::NotEq),
            '<' => (TokenKind::Lt, '=', TokenKind::LtEq),
            '>' => (TokenKind::Gt, '=', TokenKind::GtEq),
            _ => return Err(LexError::invalid_character(start)),
        };
        self.stream.advance();
        Ok(if self.stream.eat(second) { double } else { single })
    }
}

fn single_char_token(c: char) -> Option<TokenKind> {
    let kind = match c {
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '%' => TokenKind::Percent,
        _ => return None,
    };
    Some(kind)
}

fn doubled_token(c: char) -> Option<TokenKind> {
    match c {
        '&' => Some(TokenKind::And),
        '|' => Some(TokenKind::Or),
        _ => None,
    }
}

/// Value of the character after a backslash, `None` if it has no meaning.
fn cook_escape(c: char) -> Option<char> {
    match c {
        '\\' | '"' | '\'' => Some(c),
        'n' => Some('\n'),
        'b' => Some('\u{8}'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// Lex `source` to completion. The last token is always `Eof`.
pub fn lex(source: &str, limits: LexerLimits) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source, limits);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests;
