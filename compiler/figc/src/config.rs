//! Driver configuration.

use fig_lexer::LexerLimits;

/// Limits applied to one run of a Figura program.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    /// Maximum identifier length in characters.
    pub max_identifier_length: usize,
    /// Maximum string literal length in characters.
    pub max_string_length: usize,
    /// Maximum digits in an integer literal. 18 keeps every literal in `i64`.
    pub max_int_digits: usize,
    /// Maximum digits after a decimal point.
    pub max_float_decimals: usize,
    /// Maximum number of back-to-back calls of one function.
    pub max_recursion_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_identifier_length: 80,
            max_string_length: 1000,
            max_int_digits: 18,
            max_float_decimals: 15,
            max_recursion_depth: 100,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_max_identifier_length(mut self, max: usize) -> Self {
        self.max_identifier_length = max;
        self
    }

    #[must_use]
    pub fn with_max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = max;
        self
    }

    #[must_use]
    pub fn with_max_int_digits(mut self, max: usize) -> Self {
        self.max_int_digits = max;
        self
    }

    #[must_use]
    pub fn with_max_float_decimals(mut self, max: usize) -> Self {
        self.max_float_decimals = max;
        self
    }

    #[must_use]
    pub fn with_max_recursion_depth(mut self, max: usize) -> Self {
        self.max_recursion_depth = max;
        self
    }

    /// The lexical part of the configuration.
    pub fn lexer_limits(&self) -> LexerLimits {
        LexerLimits {
            max_identifier_length: self.max_identifier_length,
            max_string_length: self.max_string_length,
            max_int_digits: self.max_int_digits,
            max_float_decimals: self.max_float_decimals,
        }
    }
}
