//! Diagnostics for Figura.
//!
//! Every stage reports its first error and stops. A [`Diagnostic`] is the
//! common shape those errors are turned into for display: a searchable
//! [`ErrorCode`], the message, where it happened, and optional notes.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
