//! Low-level character stream for the Figura lexer.
//!
//! [`Stream`] walks source text one `char` at a time and keeps the
//! [`SourcePosition`](fig_ir::SourcePosition) of the current character. End
//! of input is reported as `None` instead of an error, so the lexer can treat
//! EOF like any other character class.

mod stream;

pub use stream::Stream;
