//! Where `print` output goes.
//!
//! - `Stdout`: the process's standard output (default)
//! - `Buffer`: captured for inspection by hosts and tests
//! - `Silent`: discarded

use std::cell::RefCell;
use std::rc::Rc;

pub enum PrintHandler {
    Stdout,
    Buffer(RefCell<String>),
    Silent,
}

/// Shared print handler, owned by the interpreter and its builtins.
pub type SharedPrintHandler = Rc<PrintHandler>;

impl PrintHandler {
    pub fn stdout() -> SharedPrintHandler {
        Rc::new(PrintHandler::Stdout)
    }

    pub fn buffer() -> SharedPrintHandler {
        Rc::new(PrintHandler::Buffer(RefCell::new(String::new())))
    }

    pub fn silent() -> SharedPrintHandler {
        Rc::new(PrintHandler::Silent)
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout => println!("{msg}"),
            PrintHandler::Buffer(buffer) => {
                let mut buffer = buffer.borrow_mut();
                buffer.push_str(msg);
                buffer.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Everything captured so far. Empty unless buffering.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.borrow().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let PrintHandler::Buffer(buffer) = self {
            buffer.borrow_mut().clear();
        }
    }
}
