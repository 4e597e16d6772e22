//! Runtime values for the Figura interpreter.
//!
//! - [`Symbol`]: a shared mutable cell. Variables, list elements and object
//!   attributes are all symbols, so writing through any alias is visible
//!   through every other.
//! - [`Value`]: what a symbol holds.
//! - [`List`]: a shared, growable list of symbols.
//! - [`NativeObject`]: the boundary to constructed objects (points, figures,
//!   scenes). Objects expose attribute cells and argument-checked methods.
//!
//! Everything is single-threaded: sharing is `Rc<RefCell<_>>`.

mod errors;
mod list;
mod object;
mod symbol;
mod value;

pub use errors::{check_arity, NativeError, NativeResult};
pub use list::List;
pub use object::{NativeObject, ObjectRef};
pub use symbol::Symbol;
pub use value::{Number, Value};
