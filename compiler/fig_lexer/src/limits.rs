//! Configurable lexical limits.

/// Upper bounds enforced while scanning literals and identifiers.
///
/// There is no `Default`: callers decide the limits (see `figc::Config`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerLimits {
    /// Maximum identifier length in characters.
    pub max_identifier_length: usize,
    /// Maximum string literal length in characters, after escapes.
    pub max_string_length: usize,
    /// Maximum number of digits in an integer literal (and in the integer
    /// part of a float).
    pub max_int_digits: usize,
    /// Maximum number of digits after the decimal point.
    pub max_float_decimals: usize,
}
