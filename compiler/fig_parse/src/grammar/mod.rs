//! Grammar productions.
//!
//! Every production returns `Ok(None)` when the current token cannot start
//! it, so callers can try alternatives. Once a production has consumed a
//! token it either completes or fails.

mod expr;
mod object;
mod stmt;
