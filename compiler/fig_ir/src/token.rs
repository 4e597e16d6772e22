//! Token types produced by the Figura lexer.
//!
//! [`TokenKind`] carries the literal payload. [`TokenTag`] is the fieldless
//! discriminant used wherever only the shape of a token matters, such as the
//! parser's `expect` and the "expected X, found Y" messages.

use crate::SourcePosition;
use std::fmt;

/// A token with the position of its first character.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub position: SourcePosition,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: SourcePosition) -> Self {
        Token { kind, position }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.position)
    }
}

/// Token kinds for Figura.
///
/// Float literals store bits as u64 so the type stays `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal: `42`
    Int(i64),
    /// Float literal: `3.14` (stored as bits)
    Float(u64),
    /// `True` / `False`
    Bool(bool),
    /// String literal with escapes already applied
    Str(String),
    /// Identifier
    Ident(String),

    // Keywords
    Def,
    Var,
    If,
    Elif,
    Else,
    For,
    In,
    While,
    Break,
    Return,

    // Punctuation
    Semicolon,
    Comma,
    Dot,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Operators
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    Percent,
    Assign,
    EqEq,
    Not,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    /// `&&` or `and`
    And,
    /// `||` or `or`
    Or,

    Eof,
}

impl TokenKind {
    /// Build a float token from its value.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    /// Fieldless tag of this kind.
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Float(_) => TokenTag::Float,
            TokenKind::Bool(_) => TokenTag::Bool,
            TokenKind::Str(_) => TokenTag::Str,
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::Def => TokenTag::Def,
            TokenKind::Var => TokenTag::Var,
            TokenKind::If => TokenTag::If,
            TokenKind::Elif => TokenTag::Elif,
            TokenKind::Else => TokenTag::Else,
            TokenKind::For => TokenTag::For,
            TokenKind::In => TokenTag::In,
            TokenKind::While => TokenTag::While,
            TokenKind::Break => TokenTag::Break,
            TokenKind::Return => TokenTag::Return,
            TokenKind::Semicolon => TokenTag::Semicolon,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Dot => TokenTag::Dot,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::LBrace => TokenTag::LBrace,
            TokenKind::RBrace => TokenTag::RBrace,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Star => TokenTag::Star,
            TokenKind::StarStar => TokenTag::StarStar,
            TokenKind::Slash => TokenTag::Slash,
            TokenKind::SlashSlash => TokenTag::SlashSlash,
            TokenKind::Percent => TokenTag::Percent,
            TokenKind::Assign => TokenTag::Assign,
            TokenKind::EqEq => TokenTag::EqEq,
            TokenKind::Not => TokenTag::Not,
            TokenKind::NotEq => TokenTag::NotEq,
            TokenKind::Lt => TokenTag::Lt,
            TokenKind::LtEq => TokenTag::LtEq,
            TokenKind::Gt => TokenTag::Gt,
            TokenKind::GtEq => TokenTag::GtEq,
            TokenKind::And => TokenTag::And,
            TokenKind::Or => TokenTag::Or,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    /// Float payload, if this is a float literal.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TokenKind::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

/// Discriminant of a [`TokenKind`] without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenTag {
    Int,
    Float,
    Bool,
    Str,
    Ident,
    Def,
    Var,
    If,
    Elif,
    Else,
    For,
    In,
    While,
    Break,
    Return,
    Semicolon,
    Comma,
    Dot,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    Percent,
    Assign,
    EqEq,
    Not,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Eof,
}

impl TokenTag {
    /// Human-readable name used in parser messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "string",
            Self::Ident => "identifier",
            Self::Def => "def",
            Self::Var => "var",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::For => "for",
            Self::In => "in",
            Self::While => "while",
            Self::Break => "break",
            Self::Return => "return",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::StarStar => "'**'",
            Self::Slash => "'/'",
            Self::SlashSlash => "'//'",
            Self::Percent => "'%'",
            Self::Assign => "'='",
            Self::EqEq => "'=='",
            Self::Not => "'!'",
            Self::NotEq => "'!='",
            Self::Lt => "'<'",
            Self::LtEq => "'<='",
            Self::Gt => "'>'",
            Self::GtEq => "'>='",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
