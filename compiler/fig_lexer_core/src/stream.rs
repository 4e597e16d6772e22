//! Cursor over source characters.

use fig_ir::SourcePosition;
use std::str::Chars;

/// A one-character cursor over source text.
///
/// The cursor is primed on construction: [`current`](Stream::current) is the
/// first character, at line 1 column 1. Each [`advance`](Stream::advance)
/// moves one column to the right, except that stepping past a `'\n'` moves to
/// the next line at column 0 before the next character is read. Advancing at
/// EOF keeps returning `None` while the column keeps counting, so EOF tokens
/// sit one column past the last character.
pub struct Stream<'a> {
    chars: Chars<'a>,
    current: Option<char>,
    line: u32,
    column: u32,
}

impl<'a> Stream<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut stream = Stream {
            chars: source.chars(),
            current: None,
            line: 1,
            column: 0,
        };
        stream.advance();
        stream
    }

    /// Character under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Position of the character under the cursor.
    #[inline]
    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column)
    }

    /// Whether the cursor is past the last character.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Move to the next character and return it.
    pub fn advance(&mut self) -> Option<char> {
        if self.current == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
        self.current = self.chars.next();
        self.column += 1;
        self.current
    }

    /// Advance only if the current character is `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}
