//! Mutable value cells.

use crate::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A shared cell holding one [`Value`].
///
/// Cloning a `Symbol` clones the handle, not the value: both handles see
/// later writes. Declaring a variable or passing an argument creates a
/// fresh symbol; assignment writes into an existing one.
#[derive(Clone)]
pub struct Symbol(Rc<RefCell<Value>>);

impl Symbol {
    pub fn new(value: Value) -> Self {
        Symbol(Rc::new(RefCell::new(value)))
    }

    /// Copy of the current value. Lists and objects are shared handles.
    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    /// Overwrite the stored value in place.
    pub fn set(&self, value: Value) {
        *self.0.borrow_mut() = value;
    }

    /// Run `f` on the stored value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        f(&*self.0.borrow())
    }

    /// Whether both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.0.borrow())
    }
}
