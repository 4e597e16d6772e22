//! Keyword lookup.

use fig_ir::TokenKind;

/// Map a scanned word to its keyword token, if it is one.
///
/// `and`, `or` and `not` are spellings of `&&`, `||` and `!`.
pub(crate) fn lookup(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "def" => TokenKind::Def,
        "var" => TokenKind::Var,
        "if" => TokenKind::If,
        "elif" => TokenKind::Elif,
        "else" => TokenKind::Else,
        "for" => TokenKind::For,
        "in" => TokenKind::In,
        "while" => TokenKind::While,
        "break" => TokenKind::Break,
        "return" => TokenKind::Return,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "True" => TokenKind::Bool(true),
        "False" => TokenKind::Bool(false),
        _ => return None,
    };
    Some(kind)
}
