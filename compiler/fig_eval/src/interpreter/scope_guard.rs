//! RAII guards for environment state.
//!
//! [`ScopedInterpreter`] holds `&mut Interpreter` and derefs to it, so code
//! inside a block, call or loop uses the guard exactly like the interpreter.
//! Dropping the guard undoes what creating it did, including when an error
//! is propagated with `?`.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// What a guard pushed and must pop.
enum GuardKind {
    /// A block scope.
    Scope,
    /// A call frame plus its call-stack entry.
    Frame,
    /// One level of loop nesting.
    Loop,
}

pub struct ScopedInterpreter<'guard, 'a> {
    interpreter: &'guard mut Interpreter<'a>,
    kind: GuardKind,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        match self.kind {
            GuardKind::Scope => self.interpreter.env.pop_scope(),
            GuardKind::Frame => {
                self.interpreter.env.pop_frame();
                self.interpreter.call_stack.pop();
            }
            GuardKind::Loop => self.interpreter.env.exit_loop(),
        }
    }
}

impl<'a> Deref for ScopedInterpreter<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Open a block scope, popped when the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.push_scope();
        ScopedInterpreter {
            interpreter: self,
            kind: GuardKind::Scope,
        }
    }

    /// Enter a call of user function `name` in a fresh frame.
    pub(crate) fn call_frame(&mut self, name: &'a str) -> ScopedInterpreter<'_, 'a> {
        self.env.push_frame();
        self.call_stack.push(name);
        ScopedInterpreter {
            interpreter: self,
            kind: GuardKind::Frame,
        }
    }

    /// Mark the body of a `while` or `for` as running.
    pub(crate) fn looping(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.enter_loop();
        ScopedInterpreter {
            interpreter: self,
            kind: GuardKind::Loop,
        }
    }
}
