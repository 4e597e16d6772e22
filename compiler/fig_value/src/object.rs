//! The boundary between the interpreter and constructed objects.

use crate::{NativeResult, Symbol, Value};
use std::any::Any;
use std::rc::Rc;

/// An object built by a native constructor.
///
/// The interpreter only ever talks to objects through this trait: it reads
/// attribute cells and calls methods by name. What an object does when
/// rendered is up to the implementation.
pub trait NativeObject {
    /// Class name, also the object's runtime type name.
    fn class_name(&self) -> &'static str;

    /// The cell behind attribute `name`. Writing to it changes the object.
    fn attribute(&self, name: &str) -> Option<Symbol>;

    /// Whether `name` is a method of this object.
    fn has_method(&self, name: &str) -> bool;

    /// Call method `name`. Methods check their own arity and argument
    /// types. `None` means the method returns nothing.
    fn call_method(&self, name: &str, args: &[Value]) -> NativeResult<Option<Symbol>>;

    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a native object.
pub type ObjectRef = Rc<dyn NativeObject>;
