//! Shared lists of symbols.

use crate::{Symbol, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// A list of [`Symbol`]s behind a shared handle.
///
/// Indexing returns the element's own symbol, so `a[0] = 4` and a `for`
/// binding both write into the list.
#[derive(Clone, Default)]
pub struct List(Rc<RefCell<Vec<Symbol>>>);

impl List {
    pub fn new(items: Vec<Symbol>) -> Self {
        List(Rc::new(RefCell::new(items)))
    }

    /// Wrap each value in a fresh symbol.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self::new(values.into_iter().map(Symbol::new).collect())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Map a possibly negative index to a position in the list. Negative
    /// indexes count from the end.
    pub fn resolve_index(&self, index: i64) -> Option<usize> {
        let len = i64::try_from(self.len()).ok()?;
        let resolved = if index < 0 { len + index } else { index };
        if (0..len).contains(&resolved) {
            usize::try_from(resolved).ok()
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.borrow().get(index).cloned()
    }

    pub fn push(&self, item: Symbol) {
        self.0.borrow_mut().push(item);
    }

    pub fn remove(&self, index: usize) -> Option<Symbol> {
        let mut items = self.0.borrow_mut();
        (index < items.len()).then(|| items.remove(index))
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Snapshot of the element symbols. The symbols stay shared with the
    /// list; only membership is copied.
    pub fn items(&self) -> Vec<Symbol> {
        self.0.borrow().clone()
    }

    /// Snapshot of the element values.
    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().iter().map(Symbol::get).collect()
    }

    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::value::fmt_list(self, f, &mut Vec::new())
    }
}
